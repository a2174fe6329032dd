/// Kind component of a scheduler key.
pub mod scheduler_key_type;

/// Lifecycle state of one scheduled task.
pub mod task_state;
