use crate::config::structs::redis_config::RedisConfig;

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:6379".to_string(),
            publish_address: None,
            subscribe_address: None,
        }
    }
}

impl RedisConfig {
    pub fn store_address(&self) -> &str {
        &self.address
    }

    pub fn publish_address(&self) -> &str {
        self.publish_address.as_deref().unwrap_or(&self.address)
    }

    pub fn subscribe_address(&self) -> &str {
        self.subscribe_address.as_deref().unwrap_or(&self.address)
    }
}
