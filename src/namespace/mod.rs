//! Local namespace and room registry interfaces.
//!
//! These are implemented by the connection-handling layer. The cluster core
//! only calls into them when replaying events received from the bus.

/// Namespace, hub and authorization traits.
pub mod traits;
