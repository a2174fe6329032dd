//! Payload encoding for distributed backends.
//!
//! Values written to Redis and events sent over pub/sub channels are
//! encoded with the configured `ClusterEncoding`:
//!
//! - **binary**: MessagePack (compact, default)
//! - **json**: JSON, readable with `redis-cli`
//! - **msgpack**: MessagePack

/// Encoding error enumeration.
pub mod enums;

/// Implementation blocks for encoding errors.
pub mod impls;

/// Encode/decode functions.
pub mod encoder;
