pub mod ack_entry;
pub mod ack_manager;
pub mod ack_result;
pub mod fn_ack_callback;
