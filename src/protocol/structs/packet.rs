use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::protocol::enums::packet_sub_type::PacketSubType;
use crate::protocol::enums::packet_type::PacketType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Packet {
    pub packet_type: PacketType,
    pub sub_type: Option<PacketSubType>,
    pub namespace: String,
    pub name: Option<String>,
    pub ack_id: Option<u64>,
    pub data: Vec<Value>,
}
