use async_trait::async_trait;
use serde_json::Value;
use crate::store::errors::StoreError;

#[async_trait]
pub trait SharedMap: Send + Sync {
    fn name(&self) -> &str;

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Insert or replace `key`, returning the previous value.
    async fn put(&self, key: &str, value: Value) -> Result<Option<Value>, StoreError>;

    /// Returns `true` when the key was present.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;

    async fn contains_key(&self, key: &str) -> Result<bool, StoreError>;

    async fn keys(&self) -> Result<Vec<String>, StoreError>;

    async fn len(&self) -> Result<usize, StoreError>;

    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len().await? == 0)
    }
}
