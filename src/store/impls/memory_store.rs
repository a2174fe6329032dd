use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use crate::common::structs::session_id::SessionId;
use crate::store::errors::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::traits::store::Store;

impl MemoryStore {
    pub fn new(session_id: SessionId) -> MemoryStore {
        MemoryStore {
            session_id,
            data: DashMap::new(),
            destroyed: AtomicBool::new(false),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    fn ensure_alive(&self) -> Result<(), StoreError> {
        if self.destroyed.load(Ordering::Acquire) {
            return Err(StoreError::Destroyed(self.session_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.ensure_alive()?;
        if value.is_null() {
            return Err(StoreError::NullValue(key.to_string()));
        }
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.ensure_alive()?;
        Ok(self.data.get(key).map(|value| value.value().clone()))
    }

    async fn has(&self, key: &str) -> Result<bool, StoreError> {
        self.ensure_alive()?;
        Ok(self.data.contains_key(key))
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.ensure_alive()?;
        self.data.remove(key);
        Ok(())
    }

    async fn destroy(&self) -> Result<(), StoreError> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            return Err(StoreError::Destroyed(self.session_id.to_string()));
        }
        self.data.clear();
        Ok(())
    }
}
