//! Common identifiers and shared error types.
//!
//! # Data Structures
//!
//! - `SessionId` - Identity of one client connection on one node
//! - `NodeId` - Identity of one running node in the cluster
//! - `CustomError` - Plain message error used during startup

/// Common data structures (identifiers, errors).
pub mod structs;

/// Implementation blocks for common types.
pub mod impls;
