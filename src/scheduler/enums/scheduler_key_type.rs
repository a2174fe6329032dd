use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchedulerKeyType {
    Ping,
    PingTimeout,
    AckTimeout,
    UpgradeTimeout,
    Disconnect,
    Connect,
    Dispatch,
    Join,
    Leave,
    BulkJoin,
    BulkLeave,
}
