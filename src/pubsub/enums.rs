/// Tagged union of all cluster messages.
pub mod pub_sub_message;

/// Cluster event type.
pub mod pub_sub_type;
