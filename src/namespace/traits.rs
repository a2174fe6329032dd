/// Authorization hook notified of cluster connects.
pub mod authorize_handler;

/// One namespace with its rooms.
pub mod namespace;

/// Registry of the namespaces present on this node.
pub mod namespaces_hub;
