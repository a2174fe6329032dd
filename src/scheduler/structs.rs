/// Composite scheduler key.
pub mod scheduler_key;

/// Bookkeeping for one pending keyed task.
pub mod scheduled_entry;

/// Tokio-backed scheduler.
pub mod tokio_scheduler;
