pub mod scheduled_entry;
pub mod scheduler_key;
pub mod scheduler_key_type;
pub mod tokio_scheduler;
