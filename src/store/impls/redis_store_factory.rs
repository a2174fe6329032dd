use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use parking_lot::RwLock;
use log::{debug, info, warn};
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use crate::common::structs::node_id::NodeId;
use crate::common::structs::session_id::SessionId;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::enums::store_engine::StoreEngine;
use crate::store::errors::StoreError;
use crate::store::structs::redis_pub_sub_store::RedisPubSubStore;
use crate::store::structs::redis_shared_map::RedisSharedMap;
use crate::store::structs::redis_store::RedisStore;
use crate::store::structs::redis_store_factory::{RedisStoreFactory, SharedConnection};
use crate::store::traits::shared_map::SharedMap;
use crate::store::traits::store::Store;
use crate::store::traits::store_factory::StoreFactory;

/// Clone the live connection out of `slot`, or fail once it was released.
pub(crate) fn checkout(slot: &SharedConnection) -> Result<MultiplexedConnection, StoreError> {
    slot.read().clone().ok_or(StoreError::ShutDown)
}

impl RedisStoreFactory {
    pub async fn connect(store: &StoreConfig, redis: &RedisConfig, node_id: NodeId) -> Result<RedisStoreFactory, StoreError> {
        let store_url = StoreEngine::redis.url(redis.store_address());
        let client = redis::Client::open(store_url.as_str())
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        let pub_sub = RedisPubSubStore::connect(
            &StoreEngine::redis.url(redis.publish_address()),
            &StoreEngine::redis.url(redis.subscribe_address()),
            &store.prefix,
            store.encoding,
            node_id,
            store.filter_self_messages,
        ).await?;
        Ok(RedisStoreFactory {
            connection: Arc::new(RwLock::new(Some(connection))),
            pub_sub: Arc::new(pub_sub),
            prefix: store.prefix.clone(),
            encoding: store.encoding,
            shut_down: AtomicBool::new(false),
        })
    }

    fn ensure_running(&self) -> Result<(), StoreError> {
        if self.shut_down.load(Ordering::Acquire) {
            return Err(StoreError::ShutDown);
        }
        Ok(())
    }
}

#[async_trait]
impl StoreFactory for RedisStoreFactory {
    async fn create_store(&self, session_id: &SessionId) -> Result<Arc<dyn Store>, StoreError> {
        self.ensure_running()?;
        Ok(Arc::new(RedisStore::new(*session_id, self.connection.clone(), &self.prefix, self.encoding)))
    }

    async fn create_map(&self, name: &str) -> Result<Arc<dyn SharedMap>, StoreError> {
        self.ensure_running()?;
        Ok(Arc::new(RedisSharedMap::new(name, self.connection.clone(), &self.prefix, self.encoding)))
    }

    fn pub_sub_store(&self) -> Arc<dyn PubSubStore> {
        self.pub_sub.clone()
    }

    async fn on_disconnect(&self, session_id: &SessionId) {
        let key = RedisStore::session_key(&self.prefix, session_id);
        let mut conn = match checkout(&self.connection) {
            Ok(conn) => conn,
            Err(error) => {
                warn!("[Redis] Cannot remove store {}: {}", key, error);
                return;
            }
        };
        match conn.del::<_, ()>(&key).await {
            Ok(()) => debug!("[Redis] Removed store {} of disconnected session", key),
            Err(error) => warn!("[Redis] Failed to remove store {}: {}", key, error),
        }
    }

    async fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        self.pub_sub.shutdown().await;
        self.connection.write().take();
        info!("[Redis] Store factory of node {} shut down", self.pub_sub.node_id);
    }
}
