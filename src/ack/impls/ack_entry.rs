use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use dashmap::DashMap;
use crate::ack::structs::ack_entry::AckEntry;
use crate::ack::traits::ack_callback::AckCallback;

const UNSET_INDEX: i64 = -1;

impl AckEntry {
    pub fn new() -> AckEntry {
        AckEntry {
            ack_callbacks: DashMap::new(),
            ack_index: AtomicI64::new(UNSET_INDEX),
        }
    }

    /// Store `callback` under a freshly allocated index.
    pub fn add_ack_callback(&self, callback: Arc<dyn AckCallback>) -> u64 {
        let index = self.next_index();
        self.ack_callbacks.insert(index, callback);
        index
    }

    /// Adopt `index` as the next index to allocate, unless allocation has
    /// already started. Returns whether the index was applied.
    pub fn init_ack_index(&self, index: u64) -> bool {
        self.ack_index
            .compare_exchange(UNSET_INDEX, index as i64, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn get_ack_callback(&self, index: u64) -> Option<Arc<dyn AckCallback>> {
        self.ack_callbacks.get(&index).map(|callback| callback.value().clone())
    }

    /// Remove and return the callback. Only the caller that receives
    /// `Some` may fire it.
    pub fn remove_callback(&self, index: u64) -> Option<Arc<dyn AckCallback>> {
        self.ack_callbacks.remove(&index).map(|(_, callback)| callback)
    }

    pub fn ack_indexes(&self) -> Vec<u64> {
        self.ack_callbacks.iter().map(|entry| *entry.key()).collect()
    }

    pub fn pending(&self) -> usize {
        self.ack_callbacks.len()
    }

    /// Next index to allocate, `None` while unset.
    pub fn ack_index(&self) -> Option<u64> {
        let index = self.ack_index.load(Ordering::Acquire);
        (index >= 0).then_some(index as u64)
    }

    fn next_index(&self) -> u64 {
        let mut current = self.ack_index.load(Ordering::Acquire);
        loop {
            let index = current.max(0);
            match self.ack_index.compare_exchange_weak(current, index + 1, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return index as u64,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for AckEntry {
    fn default() -> Self {
        Self::new()
    }
}
