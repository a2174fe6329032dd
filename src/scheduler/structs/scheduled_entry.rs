use std::sync::atomic::AtomicU8;
use parking_lot::Mutex;
use tokio::task::AbortHandle;

pub struct ScheduledEntry {
    pub(crate) state: AtomicU8,
    pub(crate) abort: Mutex<Option<AbortHandle>>,
}
