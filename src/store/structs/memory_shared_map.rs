use dashmap::DashMap;
use serde_json::Value;

pub struct MemorySharedMap {
    pub(crate) name: String,
    pub(crate) data: DashMap<String, Value>,
}
