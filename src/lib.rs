//! # socketio-cluster
//!
//! Clustering, session store and acknowledgment core for Socket.IO servers.
//!
//! ## Overview
//!
//! Several server nodes share room membership and event dispatch through a
//! publish/subscribe backend, keep per-session data in a pluggable store, and
//! track client acknowledgments with timeouts. Transport, namespace logic and
//! packet encoding for the wire belong to the embedding server.
//!
//! ## Features
//!
//! - **Acknowledgments**: per-session ack ids with optional timeouts, each
//!   callback completed exactly once
//! - **Scheduler**: keyed, cancelable delayed tasks on the tokio runtime
//! - **Stores**: session key/value stores and named shared maps, in memory
//!   or in Redis
//! - **Cluster Pub/Sub**: connect, disconnect, join, leave and dispatch
//!   events replayed on every node
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use socketio_cluster::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let factory = config.store.engine.connect(&config, config.node.resolve()).await?;
//! factory.init(hub, authorize_handler).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ack`] - Acknowledgment callbacks and the per-session ack registry
//! - [`common`] - Session and node identities, shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`encoding`] - Cluster payload encodings
//! - [`namespace`] - Interfaces the embedding server provides
//! - [`protocol`] - The packet value carried through the cluster
//! - [`pubsub`] - Cluster event types, messages and interfaces
//! - [`scheduler`] - Cancelable delayed tasks
//! - [`store`] - Store backends and factories
//! - [`structs`] - CLI argument parsing

/// Acknowledgment callbacks and the ack registry.
///
/// Allocates ack ids per session, arms timeouts through the scheduler and
/// delivers each acknowledgment to its callback once.
pub mod ack;

/// Common identities and error types.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Encoding of cluster payloads (binary, json, msgpack).
pub mod encoding;

/// Logging setup for binaries embedding the crate.
pub mod logging;

/// Namespace, hub and authorization interfaces consumed from the server.
pub mod namespace;

/// The protocol packet handled by acks and dispatches.
pub mod protocol;

/// Cluster publish/subscribe.
///
/// Event types, their messages and the `PubSubStore` interface backends
/// implement.
pub mod pubsub;

/// Cancelable delayed task scheduling on tokio.
pub mod scheduler;

/// Session stores, shared maps and store factories.
///
/// Memory and Redis backends, plus the wiring that replays cluster events
/// against local namespaces.
pub mod store;

/// CLI argument parsing.
pub mod structs;
