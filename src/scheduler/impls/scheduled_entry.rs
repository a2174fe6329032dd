use std::sync::atomic::{AtomicU8, Ordering};
use parking_lot::Mutex;
use tokio::task::AbortHandle;
use crate::scheduler::enums::task_state::TaskState;
use crate::scheduler::structs::scheduled_entry::ScheduledEntry;

impl ScheduledEntry {
    pub fn new() -> ScheduledEntry {
        ScheduledEntry {
            state: AtomicU8::new(TaskState::Pending as u8),
            abort: Mutex::new(None),
        }
    }

    /// Claim the right to run the task. Only one of `try_fire` and `cancel`
    /// can ever succeed.
    pub fn try_fire(&self) -> bool {
        self.transition(TaskState::Fired)
    }

    pub fn cancel(&self) -> bool {
        if !self.transition(TaskState::Cancelled) {
            return false;
        }
        if let Some(handle) = self.abort.lock().take() {
            handle.abort();
        }
        true
    }

    pub fn set_abort(&self, handle: AbortHandle) {
        let mut abort = self.abort.lock();
        if self.state() == TaskState::Cancelled {
            handle.abort();
            return;
        }
        *abort = Some(handle);
    }

    pub fn state(&self) -> TaskState {
        match self.state.load(Ordering::Acquire) {
            0 => TaskState::Pending,
            1 => TaskState::Fired,
            _ => TaskState::Cancelled,
        }
    }

    fn transition(&self, to: TaskState) -> bool {
        self.state
            .compare_exchange(TaskState::Pending as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for ScheduledEntry {
    fn default() -> Self {
        Self::new()
    }
}
