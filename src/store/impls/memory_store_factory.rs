use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, info};
use crate::common::structs::node_id::NodeId;
use crate::common::structs::session_id::SessionId;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::errors::StoreError;
use crate::store::structs::memory_pub_sub_store::MemoryPubSubStore;
use crate::store::structs::memory_shared_map::MemorySharedMap;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::structs::memory_store_factory::MemoryStoreFactory;
use crate::store::traits::shared_map::SharedMap;
use crate::store::traits::store::Store;
use crate::store::traits::store_factory::StoreFactory;

impl MemoryStoreFactory {
    pub fn new(node_id: NodeId, bus_capacity: usize, filter_self: bool) -> MemoryStoreFactory {
        MemoryStoreFactory::with_pub_sub(Arc::new(MemoryPubSubStore::new(node_id, bus_capacity, filter_self)))
    }

    pub fn with_pub_sub(pub_sub: Arc<MemoryPubSubStore>) -> MemoryStoreFactory {
        MemoryStoreFactory {
            maps: DashMap::new(),
            pub_sub,
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn memory_pub_sub(&self) -> Arc<MemoryPubSubStore> {
        self.pub_sub.clone()
    }

    fn ensure_running(&self) -> Result<(), StoreError> {
        if self.shut_down.load(Ordering::Acquire) {
            return Err(StoreError::ShutDown);
        }
        Ok(())
    }
}

#[async_trait]
impl StoreFactory for MemoryStoreFactory {
    async fn create_store(&self, session_id: &SessionId) -> Result<Arc<dyn Store>, StoreError> {
        self.ensure_running()?;
        Ok(Arc::new(MemoryStore::new(*session_id)))
    }

    async fn create_map(&self, name: &str) -> Result<Arc<dyn SharedMap>, StoreError> {
        self.ensure_running()?;
        let map = self.maps
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemorySharedMap::new(name)))
            .clone();
        Ok(map)
    }

    fn pub_sub_store(&self) -> Arc<dyn PubSubStore> {
        self.pub_sub.clone()
    }

    async fn on_disconnect(&self, session_id: &SessionId) {
        debug!("[Memory] Session {} disconnected", session_id);
    }

    async fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        self.pub_sub.shutdown().await;
        self.maps.clear();
        info!("[Memory] Store factory of node {} shut down", self.pub_sub.node_id);
    }
}
