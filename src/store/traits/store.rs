use async_trait::async_trait;
use serde_json::Value;
use crate::store::errors::StoreError;

/// Key/value data attached to one session.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fails with `StoreError::NullValue` when `value` is `Value::Null`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn has(&self, key: &str) -> Result<bool, StoreError>;

    async fn del(&self, key: &str) -> Result<(), StoreError>;

    /// Drop all data. Every later call fails with `StoreError::Destroyed`.
    async fn destroy(&self) -> Result<(), StoreError>;
}
