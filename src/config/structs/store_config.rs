use serde::{Deserialize, Serialize};
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::store::enums::store_engine::StoreEngine;

/// Missing fields take their value from `StoreConfig::default`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub engine: StoreEngine,
    pub encoding: ClusterEncoding,
    pub prefix: String,
    /// Drop pub/sub events this node published itself.
    pub filter_self_messages: bool,
    /// Capacity of the in-process broadcast bus (memory engine).
    pub bus_capacity: usize,
}
