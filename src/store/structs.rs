/// Subscribes the cluster listener to every event type.
pub mod base_store_factory;

/// Replays received cluster events locally.
pub mod cluster_event_listener;

pub mod memory_pub_sub_store;
pub mod memory_shared_map;
pub mod memory_store;
pub mod memory_store_factory;

pub mod redis_pub_sub_store;
pub mod redis_shared_map;
pub mod redis_store;
pub mod redis_store_factory;
