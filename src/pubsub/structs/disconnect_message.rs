use serde::{Deserialize, Serialize};
use crate::common::structs::session_id::SessionId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DisconnectMessage {
    pub session_id: SessionId,
}
