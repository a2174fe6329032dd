use std::sync::Arc;
use parking_lot::RwLock;
use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::StreamExt;
use log::{debug, warn};
use redis::AsyncCommands;
use crate::common::structs::node_id::NodeId;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::encoding::encoder::{decode, encode};
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::structs::pub_sub_event::PubSubEvent;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::errors::StoreError;
use crate::store::impls::redis_store_factory::checkout;
use crate::store::structs::redis_pub_sub_store::RedisPubSubStore;

impl RedisPubSubStore {
    pub async fn connect(
        publish_url: &str,
        subscribe_url: &str,
        prefix: &str,
        encoding: ClusterEncoding,
        node_id: NodeId,
        filter_self: bool,
    ) -> Result<RedisPubSubStore, StoreError> {
        let publish_client = redis::Client::open(publish_url)
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis publish client: {}", e)))?;
        let publish_connection = publish_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis for publishing: {}", e)))?;
        let subscribe_client = redis::Client::open(subscribe_url)
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis subscribe client: {}", e)))?;
        Ok(RedisPubSubStore {
            node_id,
            publish_connection: Arc::new(RwLock::new(Some(publish_connection))),
            subscribe_client,
            prefix: prefix.to_string(),
            encoding,
            filter_self,
            subscriptions: DashMap::new(),
        })
    }

    pub fn channel(&self, kind: PubSubType) -> String {
        format!("{}{}", self.prefix, kind.channel_name())
    }
}

#[async_trait]
impl PubSubStore for RedisPubSubStore {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    async fn publish(&self, kind: PubSubType, message: PubSubMessage) -> Result<(), StoreError> {
        let event = PubSubEvent::new(self.node_id, kind, message)?;
        let payload = encode(self.encoding, &event)?;
        let channel = self.channel(kind);
        let mut conn = checkout(&self.publish_connection)?;
        let receivers = conn.publish::<_, _, i64>(&channel, payload).await?;
        debug!("[Redis] Published {} to {} subscribers", channel, receivers);
        Ok(())
    }

    async fn subscribe(&self, kind: PubSubType, listener: Arc<dyn PubSubListener>) -> Result<(), StoreError> {
        checkout(&self.publish_connection)?;
        let channel = self.channel(kind);
        let mut pubsub = self.subscribe_client
            .get_async_pubsub()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to open Redis subscription: {}", e)))?;
        pubsub.subscribe(&channel).await?;

        let node_id = self.node_id;
        let filter_self = self.filter_self;
        let encoding = self.encoding;
        let task = tokio::spawn(async move {
            let mut messages = pubsub.into_on_message();
            while let Some(msg) = messages.next().await {
                let event: PubSubEvent = match decode(encoding, msg.get_payload_bytes()) {
                    Ok(event) => event,
                    Err(error) => {
                        warn!("[Redis] Dropping undecodable message on {}: {}", msg.get_channel_name(), error);
                        continue;
                    }
                };
                if event.kind != kind {
                    warn!("[Redis] Dropping {} event received on {}", event.kind, msg.get_channel_name());
                    continue;
                }
                if filter_self && event.is_from(node_id) {
                    continue;
                }
                listener.on_message(event);
            }
            warn!("[Redis] Subscription to {} closed", kind);
        });
        self.subscriptions.entry(kind).or_default().push(task.abort_handle());
        debug!("[Redis] Node {} subscribed to {}", node_id, channel);
        Ok(())
    }

    async fn unsubscribe(&self, kind: PubSubType) {
        if let Some((_, handles)) = self.subscriptions.remove(&kind) {
            for handle in handles {
                handle.abort();
            }
            debug!("[Redis] Node {} unsubscribed from {}", self.node_id, self.channel(kind));
        }
    }

    async fn shutdown(&self) {
        for kind in PubSubType::all() {
            self.unsubscribe(*kind).await;
        }
        if self.publish_connection.write().take().is_some() {
            debug!("[Redis] Node {} released its publish connection", self.node_id);
        }
    }
}
