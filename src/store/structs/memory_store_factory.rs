use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use dashmap::DashMap;
use crate::store::structs::memory_pub_sub_store::MemoryPubSubStore;
use crate::store::structs::memory_shared_map::MemorySharedMap;

pub struct MemoryStoreFactory {
    pub(crate) maps: DashMap<String, Arc<MemorySharedMap>>,
    pub(crate) pub_sub: Arc<MemoryPubSubStore>,
    pub(crate) shut_down: AtomicBool,
}
