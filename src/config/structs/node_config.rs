use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NodeConfig {
    /// Fixed node id; a random one is picked at startup when absent.
    pub node_id: Option<u64>,
}
