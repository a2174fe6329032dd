/// Single or multi argument callbacks.
pub mod ack_callback_kind;

/// Value delivered on success.
pub mod ack_result;
