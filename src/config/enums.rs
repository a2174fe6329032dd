/// Payload encoding for cluster traffic and stored values.
pub mod cluster_encoding;

/// Configuration loading errors.
pub mod configuration_error;
