use std::sync::atomic::AtomicBool;
use dashmap::DashMap;
use serde_json::Value;
use crate::common::structs::session_id::SessionId;

pub struct MemoryStore {
    pub(crate) session_id: SessionId,
    pub(crate) data: DashMap<String, Value>,
    pub(crate) destroyed: AtomicBool,
}
