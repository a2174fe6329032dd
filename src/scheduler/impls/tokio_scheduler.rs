use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use dashmap::DashMap;
use log::{debug, info, warn};
use tokio::runtime::{Handle, TryCurrentError};
use crate::scheduler::ScheduledTask;
use crate::scheduler::structs::scheduled_entry::ScheduledEntry;
use crate::scheduler::structs::scheduler_key::SchedulerKey;
use crate::scheduler::structs::tokio_scheduler::TokioScheduler;
use crate::scheduler::traits::cancelable_scheduler::CancelableScheduler;

impl TokioScheduler {
    pub fn new(runtime: Handle) -> TokioScheduler {
        TokioScheduler {
            runtime,
            tasks: Arc::new(DashMap::new()),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Bind to the runtime the caller is running on.
    pub fn from_current() -> Result<TokioScheduler, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}

impl CancelableScheduler for TokioScheduler {
    fn schedule(&self, task: ScheduledTask, delay: Duration) {
        if self.is_shut_down() {
            warn!("[Scheduler] Ignoring task scheduled after shutdown");
            return;
        }
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }

    fn schedule_callback(&self, key: SchedulerKey, task: ScheduledTask, delay: Duration) {
        if self.is_shut_down() {
            warn!("[Scheduler] Ignoring task {} scheduled after shutdown", key);
            return;
        }

        let entry = Arc::new(ScheduledEntry::new());
        if let Some(previous) = self.tasks.insert(key.clone(), entry.clone())
            && previous.cancel() {
                debug!("[Scheduler] Replaced pending task {}", key);
            }

        let tasks = self.tasks.clone();
        let fire_entry = entry.clone();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if !fire_entry.try_fire() {
                return;
            }
            tasks.remove_if(&key, |_, current| Arc::ptr_eq(current, &fire_entry));
            task();
        });
        entry.set_abort(handle.abort_handle());
    }

    fn cancel(&self, key: &SchedulerKey) {
        if let Some((_, entry)) = self.tasks.remove(key)
            && entry.cancel() {
                debug!("[Scheduler] Cancelled task {}", key);
            }
    }

    fn pending(&self) -> usize {
        self.tasks.len()
    }

    fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut cancelled = 0usize;
        self.tasks.retain(|_, entry| {
            if entry.cancel() {
                cancelled += 1;
            }
            false
        });
        info!("[Scheduler] Shut down, cancelled {} pending task(s)", cancelled);
    }
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("pending", &self.tasks.len())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}
