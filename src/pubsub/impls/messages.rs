use std::collections::BTreeSet;
use crate::common::structs::session_id::SessionId;
use crate::protocol::structs::packet::Packet;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::structs::bulk_join_leave_message::BulkJoinLeaveMessage;
use crate::pubsub::structs::connect_message::ConnectMessage;
use crate::pubsub::structs::disconnect_message::DisconnectMessage;
use crate::pubsub::structs::dispatch_message::DispatchMessage;
use crate::pubsub::structs::join_leave_message::JoinLeaveMessage;

impl ConnectMessage {
    pub fn new(session_id: SessionId) -> ConnectMessage {
        ConnectMessage { session_id }
    }
}

impl From<ConnectMessage> for PubSubMessage {
    fn from(message: ConnectMessage) -> Self {
        PubSubMessage::Connect(message)
    }
}

impl DisconnectMessage {
    pub fn new(session_id: SessionId) -> DisconnectMessage {
        DisconnectMessage { session_id }
    }
}

impl From<DisconnectMessage> for PubSubMessage {
    fn from(message: DisconnectMessage) -> Self {
        PubSubMessage::Disconnect(message)
    }
}

impl DispatchMessage {
    pub fn new(room: &str, packet: Packet, namespace: &str) -> DispatchMessage {
        DispatchMessage {
            room: room.to_string(),
            namespace: namespace.to_string(),
            packet,
        }
    }
}

impl From<DispatchMessage> for PubSubMessage {
    fn from(message: DispatchMessage) -> Self {
        PubSubMessage::Dispatch(message)
    }
}

impl JoinLeaveMessage {
    pub fn new(session_id: SessionId, room: &str, namespace: &str) -> JoinLeaveMessage {
        JoinLeaveMessage {
            session_id,
            namespace: namespace.to_string(),
            room: room.to_string(),
        }
    }
}

impl From<JoinLeaveMessage> for PubSubMessage {
    fn from(message: JoinLeaveMessage) -> Self {
        PubSubMessage::JoinLeave(message)
    }
}

impl BulkJoinLeaveMessage {
    pub fn new<I, S>(session_id: SessionId, rooms: I, namespace: &str) -> BulkJoinLeaveMessage
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BulkJoinLeaveMessage {
            session_id,
            namespace: namespace.to_string(),
            rooms: rooms.into_iter().map(Into::into).collect::<BTreeSet<String>>(),
        }
    }
}

impl From<BulkJoinLeaveMessage> for PubSubMessage {
    fn from(message: BulkJoinLeaveMessage) -> Self {
        PubSubMessage::BulkJoinLeave(message)
    }
}
