use std::fmt;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;

impl PubSubType {
    pub const ALL: [PubSubType; 7] = [
        PubSubType::Connect,
        PubSubType::Disconnect,
        PubSubType::Join,
        PubSubType::BulkJoin,
        PubSubType::Leave,
        PubSubType::BulkLeave,
        PubSubType::Dispatch,
    ];

    pub fn all() -> &'static [PubSubType] {
        &Self::ALL
    }

    /// Channel name used by distributed backends (without prefix).
    pub fn channel_name(&self) -> &'static str {
        match self {
            PubSubType::Connect => "connect",
            PubSubType::Disconnect => "disconnect",
            PubSubType::Join => "join",
            PubSubType::BulkJoin => "bulk_join",
            PubSubType::Leave => "leave",
            PubSubType::BulkLeave => "bulk_leave",
            PubSubType::Dispatch => "dispatch",
        }
    }

    pub fn from_channel_name(name: &str) -> Option<PubSubType> {
        Self::ALL.iter().copied().find(|kind| kind.channel_name() == name)
    }

    /// Whether `message` is the payload this event type carries.
    pub fn accepts(&self, message: &PubSubMessage) -> bool {
        matches!(
            (self, message),
            (PubSubType::Connect, PubSubMessage::Connect(_))
                | (PubSubType::Disconnect, PubSubMessage::Disconnect(_))
                | (PubSubType::Dispatch, PubSubMessage::Dispatch(_))
                | (PubSubType::Join | PubSubType::Leave, PubSubMessage::JoinLeave(_))
                | (PubSubType::BulkJoin | PubSubType::BulkLeave, PubSubMessage::BulkJoinLeave(_))
        )
    }
}

impl fmt::Display for PubSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.channel_name())
    }
}
