use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use dashmap::DashMap;
use crate::ack::traits::ack_callback::AckCallback;

/// Pending callbacks of one session.
///
/// `ack_index` holds the next index to hand out, or `-1` while unset.
pub struct AckEntry {
    pub(crate) ack_callbacks: DashMap<u64, Arc<dyn AckCallback>>,
    pub(crate) ack_index: AtomicI64,
}
