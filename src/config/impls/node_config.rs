use crate::common::structs::node_id::NodeId;
use crate::config::structs::node_config::NodeConfig;

impl NodeConfig {
    /// The configured node id, or a random one.
    pub fn resolve(&self) -> NodeId {
        self.node_id.map(NodeId::new).unwrap_or_else(NodeId::random)
    }
}
