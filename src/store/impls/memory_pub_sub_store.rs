use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, warn};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use crate::common::structs::node_id::NodeId;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::structs::pub_sub_event::PubSubEvent;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::errors::StoreError;
use crate::store::structs::memory_pub_sub_store::{ListenerMap, MemoryPubSubStore};

impl MemoryPubSubStore {
    pub fn new(node_id: NodeId, capacity: usize, filter_self: bool) -> MemoryPubSubStore {
        let (bus, _) = broadcast::channel(capacity.max(1));
        MemoryPubSubStore::from_bus(node_id, bus, filter_self)
    }

    pub fn from_bus(node_id: NodeId, bus: broadcast::Sender<PubSubEvent>, filter_self: bool) -> MemoryPubSubStore {
        MemoryPubSubStore {
            node_id,
            bus,
            filter_self,
            listeners: Arc::new(DashMap::new()),
            receiver_task: Mutex::new(None),
        }
    }

    /// Another node on the same bus, with the same self-filtering.
    pub fn with_bus(&self, node_id: NodeId) -> MemoryPubSubStore {
        MemoryPubSubStore::from_bus(node_id, self.bus.clone(), self.filter_self)
    }

    pub fn subscription_count(&self, kind: PubSubType) -> usize {
        self.listeners.get(&kind).map(|listeners| listeners.len()).unwrap_or(0)
    }

    pub fn is_receiving(&self) -> bool {
        self.receiver_task.lock().is_some()
    }

    fn ensure_receiving(&self) {
        let mut task = self.receiver_task.lock();
        if task.is_some() {
            return;
        }
        // Subscribed here, before returning, so nothing published later is missed.
        let receiver = self.bus.subscribe();
        let handle = tokio::spawn(MemoryPubSubStore::receive(receiver, self.listeners.clone(), self.node_id, self.filter_self));
        *task = Some(handle.abort_handle());
    }

    async fn receive(
        mut receiver: broadcast::Receiver<PubSubEvent>,
        listeners: Arc<ListenerMap>,
        node_id: NodeId,
        filter_self: bool,
    ) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if filter_self && event.is_from(node_id) {
                        continue;
                    }
                    let targets = match listeners.get(&event.kind) {
                        Some(targets) => targets.value().clone(),
                        None => continue,
                    };
                    for listener in targets {
                        listener.on_message(event.clone());
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("[Memory] Node {} lagged behind the bus, {} events skipped", node_id, skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

#[async_trait]
impl PubSubStore for MemoryPubSubStore {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    async fn publish(&self, kind: PubSubType, message: PubSubMessage) -> Result<(), StoreError> {
        let event = PubSubEvent::new(self.node_id, kind, message)?;
        match self.bus.send(event) {
            Ok(receivers) => debug!("[Memory] Published {} to {} nodes", kind, receivers),
            Err(_) => debug!("[Memory] Published {} without subscribers", kind),
        }
        Ok(())
    }

    async fn subscribe(&self, kind: PubSubType, listener: Arc<dyn PubSubListener>) -> Result<(), StoreError> {
        self.listeners.entry(kind).or_default().push(listener);
        self.ensure_receiving();
        debug!("[Memory] Node {} subscribed to {}", self.node_id, kind);
        Ok(())
    }

    async fn unsubscribe(&self, kind: PubSubType) {
        if self.listeners.remove(&kind).is_some() {
            debug!("[Memory] Node {} unsubscribed from {}", self.node_id, kind);
        }
    }

    async fn shutdown(&self) {
        self.listeners.clear();
        if let Some(task) = self.receiver_task.lock().take() {
            task.abort();
        }
    }
}
