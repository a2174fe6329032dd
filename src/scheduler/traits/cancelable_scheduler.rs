use std::time::Duration;
use crate::scheduler::ScheduledTask;
use crate::scheduler::structs::scheduler_key::SchedulerKey;

pub trait CancelableScheduler: Send + Sync {
    /// Run `task` once after `delay`. The task cannot be cancelled.
    fn schedule(&self, task: ScheduledTask, delay: Duration);

    /// Run `task` once after `delay` unless `key` is cancelled first.
    ///
    /// Scheduling a key that is still pending cancels the earlier task.
    fn schedule_callback(&self, key: SchedulerKey, task: ScheduledTask, delay: Duration);

    /// Cancel the task registered under `key`. Unknown, fired or already
    /// cancelled keys are ignored.
    fn cancel(&self, key: &SchedulerKey);

    /// Number of keyed tasks still waiting to fire.
    fn pending(&self) -> usize;

    /// Cancel everything pending and refuse new tasks.
    fn shutdown(&self);
}
