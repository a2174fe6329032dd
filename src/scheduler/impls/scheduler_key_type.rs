use std::fmt;
use crate::scheduler::enums::scheduler_key_type::SchedulerKeyType;

impl fmt::Display for SchedulerKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchedulerKeyType::Ping => "PING",
            SchedulerKeyType::PingTimeout => "PING_TIMEOUT",
            SchedulerKeyType::AckTimeout => "ACK_TIMEOUT",
            SchedulerKeyType::UpgradeTimeout => "UPGRADE_TIMEOUT",
            SchedulerKeyType::Disconnect => "DISCONNECT",
            SchedulerKeyType::Connect => "CONNECT",
            SchedulerKeyType::Dispatch => "DISPATCH",
            SchedulerKeyType::Join => "JOIN",
            SchedulerKeyType::Leave => "LEAVE",
            SchedulerKeyType::BulkJoin => "BULK_JOIN",
            SchedulerKeyType::BulkLeave => "BULK_LEAVE",
        };
        write!(f, "{}", name)
    }
}
