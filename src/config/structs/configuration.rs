use serde::{Deserialize, Serialize};
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::store_config::StoreConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub redis: RedisConfig,
}
