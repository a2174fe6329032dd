use crate::common::structs::session_id::SessionId;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;

impl PubSubMessage {
    pub fn variant_name(&self) -> &'static str {
        match self {
            PubSubMessage::Connect(_) => "Connect",
            PubSubMessage::Disconnect(_) => "Disconnect",
            PubSubMessage::Dispatch(_) => "Dispatch",
            PubSubMessage::JoinLeave(_) => "JoinLeave",
            PubSubMessage::BulkJoinLeave(_) => "BulkJoinLeave",
        }
    }

    /// Session the message is about; dispatches target a room instead.
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            PubSubMessage::Connect(message) => Some(message.session_id),
            PubSubMessage::Disconnect(message) => Some(message.session_id),
            PubSubMessage::Dispatch(_) => None,
            PubSubMessage::JoinLeave(message) => Some(message.session_id),
            PubSubMessage::BulkJoinLeave(message) => Some(message.session_id),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            PubSubMessage::Connect(_) | PubSubMessage::Disconnect(_) => None,
            PubSubMessage::Dispatch(message) => Some(&message.namespace),
            PubSubMessage::JoinLeave(message) => Some(&message.namespace),
            PubSubMessage::BulkJoinLeave(message) => Some(&message.namespace),
        }
    }
}
