use serde::{Deserialize, Serialize};

/// Identity of a node, stamped on every pub/sub event it publishes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);
