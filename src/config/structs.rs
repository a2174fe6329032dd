//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Node identity settings.
pub mod node_config;

/// Store engine settings.
pub mod store_config;

/// Redis connection settings.
pub mod redis_config;
