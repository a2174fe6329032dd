use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use dashmap::DashMap;
use tokio::runtime::Handle;
use crate::scheduler::structs::scheduled_entry::ScheduledEntry;
use crate::scheduler::structs::scheduler_key::SchedulerKey;

pub struct TokioScheduler {
    pub(crate) runtime: Handle,
    pub(crate) tasks: Arc<DashMap<SchedulerKey, Arc<ScheduledEntry>>>,
    pub(crate) shut_down: AtomicBool,
}
