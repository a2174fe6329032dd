/// Plain message error.
pub mod custom_error;

/// Cluster node identity.
pub mod node_id;

/// Client session identity.
pub mod session_id;
