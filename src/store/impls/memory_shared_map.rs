use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use crate::store::errors::StoreError;
use crate::store::structs::memory_shared_map::MemorySharedMap;
use crate::store::traits::shared_map::SharedMap;

impl MemorySharedMap {
    pub fn new(name: &str) -> MemorySharedMap {
        MemorySharedMap {
            name: name.to_string(),
            data: DashMap::new(),
        }
    }
}

#[async_trait]
impl SharedMap for MemorySharedMap {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.get(key).map(|value| value.value().clone()))
    }

    async fn put(&self, key: &str, value: Value) -> Result<Option<Value>, StoreError> {
        if value.is_null() {
            return Err(StoreError::NullValue(key.to_string()));
        }
        Ok(self.data.insert(key.to_string(), value))
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.remove(key).is_some())
    }

    async fn contains_key(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.data.len())
    }
}
