//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the node configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **log_level**: Logging verbosity
//! - **node**: Node identity used to stamp cluster traffic
//! - **store**: Store engine, cluster encoding and key prefix
//! - **redis**: Redis connection addresses (store, publish, subscribe)
//!
//! # Example
//!
//! ```rust,ignore
//! use socketio_cluster::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (cluster encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
