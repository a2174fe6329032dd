use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::common::structs::session_id::SessionId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BulkJoinLeaveMessage {
    pub session_id: SessionId,
    pub namespace: String,
    pub rooms: BTreeSet<String>,
}
