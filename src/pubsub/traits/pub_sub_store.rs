use std::sync::Arc;
use async_trait::async_trait;
use crate::common::structs::node_id::NodeId;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;
use crate::store::errors::StoreError;

#[async_trait]
pub trait PubSubStore: Send + Sync {
    /// Identity stamped on every published event.
    fn node_id(&self) -> NodeId;

    /// Broadcast `message` to every node. Whether the publisher receives its
    /// own event depends on the backend and on self-filtering.
    async fn publish(&self, kind: PubSubType, message: PubSubMessage) -> Result<(), StoreError>;

    /// Register `listener` for `kind`. Several listeners per type are allowed.
    async fn subscribe(&self, kind: PubSubType, listener: Arc<dyn PubSubListener>) -> Result<(), StoreError>;

    /// Drop every listener registered for `kind`.
    async fn unsubscribe(&self, kind: PubSubType);

    /// Drop all listeners and release backend connections.
    async fn shutdown(&self);
}
