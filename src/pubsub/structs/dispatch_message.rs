use serde::{Deserialize, Serialize};
use crate::protocol::structs::packet::Packet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DispatchMessage {
    pub room: String,
    pub namespace: String,
    pub packet: Packet,
}
