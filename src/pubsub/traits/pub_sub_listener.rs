use crate::pubsub::structs::pub_sub_event::PubSubEvent;

/// Receives events of the types it was subscribed to, one at a time and
/// in the order this node received them.
pub trait PubSubListener: Send + Sync {
    fn on_message(&self, event: PubSubEvent);
}
