//! Cluster publish/subscribe messages and interfaces.
//!
//! Every node publishes the room and session changes it applied locally and
//! replays the events it receives from other nodes, so room membership
//! converges without a leader.
//!
//! # Event Types
//!
//! | type | message | replayed as |
//! |---|---|---|
//! | connect | `ConnectMessage` | `AuthorizeHandler::connect` |
//! | disconnect | `DisconnectMessage` | log only |
//! | dispatch | `DispatchMessage` | `Namespace::dispatch` |
//! | join / leave | `JoinLeaveMessage` | `Namespace::join` / `leave` |
//! | bulk_join / bulk_leave | `BulkJoinLeaveMessage` | join / leave per room |
//!
//! Backends implementing `PubSubStore` live in the `store` module.

/// Event type and message enumerations.
pub mod enums;

/// Message and event envelope structures.
pub mod structs;

/// Implementation blocks for pub/sub types.
pub mod impls;

/// Pub/sub store and listener traits.
pub mod traits;
