use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use serde_json::Value;
use crate::common::structs::session_id::SessionId;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::encoding::encoder::{decode, encode};
use crate::store::errors::StoreError;
use crate::store::impls::redis_store_factory::checkout;
use crate::store::structs::redis_store_factory::SharedConnection;
use crate::store::structs::redis_store::RedisStore;
use crate::store::traits::store::Store;

impl RedisStore {
    pub fn new(session_id: SessionId, connection: SharedConnection, prefix: &str, encoding: ClusterEncoding) -> RedisStore {
        RedisStore {
            session_id,
            connection,
            key: RedisStore::session_key(prefix, &session_id),
            encoding,
            destroyed: AtomicBool::new(false),
        }
    }

    pub fn session_key(prefix: &str, session_id: &SessionId) -> String {
        format!("{}session:{}", prefix, session_id)
    }

    fn ensure_alive(&self) -> Result<(), StoreError> {
        if self.destroyed.load(Ordering::Acquire) {
            return Err(StoreError::Destroyed(self.session_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.ensure_alive()?;
        if value.is_null() {
            return Err(StoreError::NullValue(key.to_string()));
        }
        let payload = encode(self.encoding, &value)?;
        let mut conn = checkout(&self.connection)?;
        conn.hset::<_, _, _, ()>(&self.key, key, payload).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.ensure_alive()?;
        let mut conn = checkout(&self.connection)?;
        let payload: Option<Vec<u8>> = conn.hget(&self.key, key).await?;
        match payload {
            Some(bytes) => Ok(Some(decode(self.encoding, &bytes)?)),
            None => Ok(None),
        }
    }

    async fn has(&self, key: &str) -> Result<bool, StoreError> {
        self.ensure_alive()?;
        let mut conn = checkout(&self.connection)?;
        Ok(conn.hexists(&self.key, key).await?)
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.ensure_alive()?;
        let mut conn = checkout(&self.connection)?;
        conn.hdel::<_, _, ()>(&self.key, key).await?;
        Ok(())
    }

    async fn destroy(&self) -> Result<(), StoreError> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            return Err(StoreError::Destroyed(self.session_id.to_string()));
        }
        let mut conn = checkout(&self.connection)?;
        conn.del::<_, ()>(&self.key).await?;
        debug!("[Redis] Destroyed store {}", self.key);
        Ok(())
    }
}
