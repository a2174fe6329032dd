use crate::common::structs::node_id::NodeId;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::structs::pub_sub_event::PubSubEvent;
use crate::store::errors::StoreError;

impl PubSubEvent {
    /// Build an event, rejecting a message that `kind` does not carry.
    pub fn new(node_id: NodeId, kind: PubSubType, message: PubSubMessage) -> Result<PubSubEvent, StoreError> {
        if !kind.accepts(&message) {
            return Err(StoreError::MessageTypeMismatch {
                kind,
                message: message.variant_name(),
            });
        }
        Ok(PubSubEvent { node_id, kind, message })
    }

    pub fn is_from(&self, node_id: NodeId) -> bool {
        self.node_id == node_id
    }
}
