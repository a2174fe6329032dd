use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PubSubType {
    Connect,
    Disconnect,
    Join,
    BulkJoin,
    Leave,
    BulkLeave,
    Dispatch,
}
