use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RedisConfig {
    /// Address used for store and shared map operations.
    pub address: String,
    /// Address used for publishing; falls back to `address`.
    pub publish_address: Option<String>,
    /// Address used for subscriptions; falls back to `address`.
    pub subscribe_address: Option<String>,
}
