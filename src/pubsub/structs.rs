pub mod bulk_join_leave_message;
pub mod connect_message;
pub mod disconnect_message;
pub mod dispatch_message;
pub mod join_leave_message;

/// Envelope delivered to listeners.
pub mod pub_sub_event;
