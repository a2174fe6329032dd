use std::fmt;
use crate::common::structs::session_id::SessionId;
use crate::scheduler::enums::scheduler_key_type::SchedulerKeyType;
use crate::scheduler::structs::scheduler_key::SchedulerKey;

impl SchedulerKey {
    pub fn new(kind: SchedulerKeyType, session_id: SessionId) -> SchedulerKey {
        SchedulerKey { kind, session_id, sub_id: None }
    }

    pub fn with_sub_id(kind: SchedulerKeyType, session_id: SessionId, sub_id: u64) -> SchedulerKey {
        SchedulerKey { kind, session_id, sub_id: Some(sub_id) }
    }

    /// Key of the timeout guarding ack `index` of `session_id`.
    pub fn ack_timeout(session_id: SessionId, index: u64) -> SchedulerKey {
        Self::with_sub_id(SchedulerKeyType::AckTimeout, session_id, index)
    }
}

impl fmt::Display for SchedulerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_id {
            None => write!(f, "{}:{}", self.kind, self.session_id),
            Some(sub_id) => write!(f, "{}:{}:{}", self.kind, self.session_id, sub_id),
        }
    }
}
