/// Named cluster-wide map.
pub mod shared_map;

/// Session-scoped key/value store.
pub mod store;

/// Per-node factory for stores, maps and pub/sub.
pub mod store_factory;
