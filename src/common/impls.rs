pub mod custom_error;
pub mod node_id;
pub mod session_id;
