use serde::{Deserialize, Serialize};
use crate::common::structs::session_id::SessionId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JoinLeaveMessage {
    pub session_id: SessionId,
    pub namespace: String,
    pub room: String,
}
