use std::fmt;
use rand::RngExt;
use crate::common::structs::node_id::NodeId;

impl NodeId {
    pub fn new(id: u64) -> NodeId {
        NodeId(id)
    }

    /// Pick a random identity for this process.
    pub fn random() -> NodeId {
        let mut rng = rand::rng();
        NodeId(rng.random())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
