/// Per-session callback registry.
pub mod ack_entry;

/// Process-wide ack manager.
pub mod ack_manager;

/// Closure based callback.
pub mod fn_ack_callback;
