use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::encoding::encoder::{decode, encode};
use crate::store::errors::StoreError;
use crate::store::impls::redis_store_factory::checkout;
use crate::store::structs::redis_store_factory::SharedConnection;
use crate::store::structs::redis_shared_map::RedisSharedMap;
use crate::store::traits::shared_map::SharedMap;

impl RedisSharedMap {
    pub fn new(name: &str, connection: SharedConnection, prefix: &str, encoding: ClusterEncoding) -> RedisSharedMap {
        RedisSharedMap {
            name: name.to_string(),
            connection,
            key: RedisSharedMap::map_key(prefix, name),
            encoding,
        }
    }

    pub fn map_key(prefix: &str, name: &str) -> String {
        format!("{}map:{}", prefix, name)
    }

    fn decode_value(&self, payload: Option<Vec<u8>>) -> Result<Option<Value>, StoreError> {
        match payload {
            Some(bytes) => Ok(Some(decode(self.encoding, &bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SharedMap for RedisSharedMap {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut conn = checkout(&self.connection)?;
        let payload: Option<Vec<u8>> = conn.hget(&self.key, key).await?;
        self.decode_value(payload)
    }

    async fn put(&self, key: &str, value: Value) -> Result<Option<Value>, StoreError> {
        if value.is_null() {
            return Err(StoreError::NullValue(key.to_string()));
        }
        let payload = encode(self.encoding, &value)?;
        let mut conn = checkout(&self.connection)?;
        let (previous, _): (Option<Vec<u8>>, i64) = redis::pipe()
            .atomic()
            .hget(&self.key, key)
            .hset(&self.key, key, payload)
            .query_async(&mut conn)
            .await?;
        self.decode_value(previous)
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = checkout(&self.connection)?;
        let removed: i64 = conn.hdel(&self.key, key).await?;
        Ok(removed > 0)
    }

    async fn contains_key(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = checkout(&self.connection)?;
        Ok(conn.hexists(&self.key, key).await?)
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = checkout(&self.connection)?;
        let mut keys: Vec<String> = conn.hkeys(&self.key).await?;
        keys.sort();
        Ok(keys)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        let mut conn = checkout(&self.connection)?;
        Ok(conn.hlen(&self.key).await?)
    }
}
