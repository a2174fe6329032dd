//! Session stores, shared maps and the store factories that build them.
//!
//! # Supported Backends
//!
//! - **memory**: everything lives in this process; pub/sub runs over a
//!   tokio broadcast bus that several factories can share.
//! - **redis**: session stores and shared maps are Redis hashes, pub/sub
//!   runs over Redis channels.
//!
//! # Architecture
//!
//! - `StoreFactory` builds `Store`s, `SharedMap`s and owns the node's
//!   `PubSubStore`
//! - `BaseStoreFactory` wires incoming cluster events into the local
//!   namespaces
//! - `StoreEngine` selects and connects the configured backend

/// Store engine enumeration (memory, redis).
pub mod enums;

/// Error types for store and pub/sub operations.
pub mod errors;

/// Implementation blocks for backends and factories.
pub mod impls;

/// Data structures for backends and factories.
pub mod structs;

/// Store, shared map and factory traits.
pub mod traits;

#[cfg(test)]
mod tests;
