use std::sync::Arc;
use dashmap::DashMap;
use crate::ack::structs::ack_entry::AckEntry;
use crate::common::structs::session_id::SessionId;
use crate::scheduler::traits::cancelable_scheduler::CancelableScheduler;

pub struct AckManager {
    pub(crate) ack_entries: Arc<DashMap<SessionId, Arc<AckEntry>>>,
    pub(crate) scheduler: Arc<dyn CancelableScheduler>,
}
