use serde_json::Value;
use crate::protocol::enums::packet_sub_type::PacketSubType;
use crate::protocol::enums::packet_type::PacketType;
use crate::protocol::structs::packet::Packet;

impl Packet {
    pub fn new(packet_type: PacketType) -> Packet {
        Packet {
            packet_type,
            sub_type: None,
            namespace: String::from("/"),
            name: None,
            ack_id: None,
            data: Vec::new(),
        }
    }

    /// Named event sent to `namespace`.
    pub fn event(namespace: &str, name: &str, data: Vec<Value>) -> Packet {
        Packet {
            packet_type: PacketType::Message,
            sub_type: Some(PacketSubType::Event),
            namespace: namespace.to_string(),
            name: Some(name.to_string()),
            ack_id: None,
            data,
        }
    }

    /// Acknowledgment of `ack_id` carrying `data`.
    pub fn ack(namespace: &str, ack_id: u64, data: Vec<Value>) -> Packet {
        Packet {
            packet_type: PacketType::Message,
            sub_type: Some(PacketSubType::Ack),
            namespace: namespace.to_string(),
            name: None,
            ack_id: Some(ack_id),
            data,
        }
    }

    pub fn with_ack_id(mut self, ack_id: u64) -> Packet {
        self.ack_id = Some(ack_id);
        self
    }

    pub fn ack_id(&self) -> Option<u64> {
        self.ack_id
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn is_ack_requested(&self) -> bool {
        self.ack_id.is_some()
    }
}
