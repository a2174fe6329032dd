use serde::{Deserialize, Serialize};
use crate::common::structs::session_id::SessionId;
use crate::scheduler::enums::scheduler_key_type::SchedulerKeyType;

/// Identity of a scheduled task.
///
/// Equality is structural: two keys built from the same kind, session and
/// sub id address the same task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchedulerKey {
    pub kind: SchedulerKeyType,
    pub session_id: SessionId,
    pub sub_id: Option<u64>,
}
