pub mod cluster_encoding;
pub mod configuration;
pub mod configuration_error;
pub mod node_config;
pub mod redis_config;
pub mod store_config;
