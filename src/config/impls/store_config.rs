use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_engine::StoreEngine;

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            engine: StoreEngine::memory,
            encoding: ClusterEncoding::msgpack,
            prefix: "socketio:".to_string(),
            filter_self_messages: false,
            bus_capacity: 1024,
        }
    }
}
