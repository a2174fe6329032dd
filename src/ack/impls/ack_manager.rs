use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use dashmap::DashMap;
use log::{debug, warn};
use crate::ack::enums::ack_callback_kind::AckCallbackKind;
use crate::ack::enums::ack_result::AckResult;
use crate::ack::structs::ack_entry::AckEntry;
use crate::ack::structs::ack_manager::AckManager;
use crate::ack::traits::ack_callback::AckCallback;
use crate::common::structs::session_id::SessionId;
use crate::protocol::structs::packet::Packet;
use crate::scheduler::structs::scheduler_key::SchedulerKey;
use crate::scheduler::traits::cancelable_scheduler::CancelableScheduler;

impl AckManager {
    pub fn new(scheduler: Arc<dyn CancelableScheduler>) -> AckManager {
        AckManager {
            ack_entries: Arc::new(DashMap::new()),
            scheduler,
        }
    }

    /// Register `callback` and return the ack id to embed in the outgoing
    /// packet.
    #[tracing::instrument(level = "debug", skip(self, callback))]
    pub fn register_ack(&self, session_id: &SessionId, callback: Arc<dyn AckCallback>) -> u64 {
        let entry = self.get_ack_entry(session_id);
        entry.init_ack_index(0);

        let timeout = callback.timeout();
        let index = entry.add_ack_callback(callback);

        // A disconnect may have detached the entry before the insert landed.
        if !self.is_attached(session_id, &entry) {
            if let Some(callback) = entry.remove_callback(index) {
                debug!("[AckManager] Session {} disconnected while registering ack {}", session_id, index);
                callback.on_timeout();
            }
            return index;
        }

        if timeout >= 0 {
            let key = SchedulerKey::ack_timeout(*session_id, index);
            let timeout_entry = entry.clone();
            let session_id = *session_id;
            self.scheduler.schedule_callback(key, Box::new(move || {
                if let Some(callback) = timeout_entry.remove_callback(index) {
                    debug!("[AckManager] Ack {} of session {} timed out", index, session_id);
                    callback.on_timeout();
                }
            }), Duration::from_secs(timeout as u64));
        }

        index
    }

    /// Deliver an acknowledgment packet received from the client.
    #[tracing::instrument(level = "debug", skip(self, packet))]
    pub fn on_ack(&self, session_id: &SessionId, packet: &Packet) {
        let Some(ack_id) = packet.ack_id() else {
            debug!("[AckManager] Ack packet without ack id from session {}", session_id);
            return;
        };

        self.scheduler.cancel(&SchedulerKey::ack_timeout(*session_id, ack_id));

        let Some(callback) = self.remove_callback(session_id, ack_id) else {
            debug!("[AckManager] No pending callback for ack {} of session {}", ack_id, session_id);
            return;
        };

        let args = packet.data();
        match callback.kind() {
            AckCallbackKind::Multi => {
                callback.on_success(AckResult::Multi(args.to_vec()));
            }
            AckCallbackKind::Single => {
                if args.len() > 1 {
                    warn!(
                        "[AckManager] Wrong ack args amount. Should be only one argument, but current amount is: {}. Ack id: {}, sessionId: {}",
                        args.len(), ack_id, session_id
                    );
                }
                callback.on_success(AckResult::Single(args.first().cloned()));
            }
        }
    }

    pub fn init_ack_index(&self, session_id: &SessionId, index: u64) {
        if !self.get_ack_entry(session_id).init_ack_index(index) {
            debug!("[AckManager] Ack index of session {} already initialized", session_id);
        }
    }

    pub fn get_callback(&self, session_id: &SessionId, index: u64) -> Option<Arc<dyn AckCallback>> {
        self.entry(session_id)?.get_ack_callback(index)
    }

    /// Drop the session's entry and fire the timeout outcome of every
    /// callback still pending.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_disconnect(&self, session_id: &SessionId) {
        let Some((_, entry)) = self.ack_entries.remove(session_id) else {
            return;
        };

        let indexes = entry.ack_indexes();
        if !indexes.is_empty() {
            debug!("[AckManager] Session {} disconnected with {} pending ack(s)", session_id, indexes.len());
        }
        for index in indexes {
            if let Some(callback) = entry.remove_callback(index) {
                callback.on_timeout();
            }
            self.scheduler.cancel(&SchedulerKey::ack_timeout(*session_id, index));
        }
    }

    pub fn pending_acks(&self, session_id: &SessionId) -> usize {
        self.entry(session_id).map(|entry| entry.pending()).unwrap_or(0)
    }

    pub fn session_count(&self) -> usize {
        self.ack_entries.len()
    }

    fn remove_callback(&self, session_id: &SessionId, index: u64) -> Option<Arc<dyn AckCallback>> {
        self.entry(session_id)?.remove_callback(index)
    }

    fn entry(&self, session_id: &SessionId) -> Option<Arc<AckEntry>> {
        self.ack_entries.get(session_id).map(|entry| entry.value().clone())
    }

    fn is_attached(&self, session_id: &SessionId, entry: &Arc<AckEntry>) -> bool {
        self.ack_entries
            .get(session_id)
            .map(|current| Arc::ptr_eq(current.value(), entry))
            .unwrap_or(false)
    }

    fn get_ack_entry(&self, session_id: &SessionId) -> Arc<AckEntry> {
        self.ack_entries
            .entry(*session_id)
            .or_insert_with(|| Arc::new(AckEntry::new()))
            .value()
            .clone()
    }
}

impl fmt::Debug for AckManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AckManager")
            .field("sessions", &self.ack_entries.len())
            .finish()
    }
}
