use std::fmt;
use std::sync::Arc;
use log::info;
use crate::common::structs::node_id::NodeId;
use crate::config::structs::configuration::Configuration;
use crate::store::enums::store_engine::StoreEngine;
use crate::store::errors::StoreError;
use crate::store::structs::memory_store_factory::MemoryStoreFactory;
use crate::store::structs::redis_store_factory::RedisStoreFactory;
use crate::store::traits::store_factory::StoreFactory;

impl fmt::Display for StoreEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEngine::memory => write!(f, "memory"),
            StoreEngine::redis => write!(f, "redis"),
        }
    }
}

impl StoreEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            StoreEngine::memory => "memory://",
            StoreEngine::redis => "redis://",
        }
    }

    /// Prefix `address` with the engine scheme unless it already has one.
    pub fn url(&self, address: &str) -> String {
        if address.contains("://") {
            address.to_string()
        } else {
            format!("{}{}", self.url_scheme(), address)
        }
    }

    /// Build the store factory for this engine.
    pub async fn connect(&self, config: &Configuration, node_id: NodeId) -> Result<Arc<dyn StoreFactory>, StoreError> {
        match self {
            StoreEngine::memory => {
                let factory = MemoryStoreFactory::new(node_id, config.store.bus_capacity, config.store.filter_self_messages);
                info!("[Memory] Store factory ready for node {}", node_id);
                Ok(Arc::new(factory))
            }
            StoreEngine::redis => {
                let factory = RedisStoreFactory::connect(&config.store, &config.redis, node_id).await?;
                info!("[Redis] Connected to Redis at {}", config.redis.store_address());
                Ok(Arc::new(factory))
            }
        }
    }
}
