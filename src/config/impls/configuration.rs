use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_engine::StoreEngine;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            node: NodeConfig::default(),
            store: StoreConfig::default(),
            redis: RedisConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{}", ConfigurationError::SerializeError(e));
                        return Err(CustomError::new("could not serialize default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new("create config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {}", error);
            return Err(CustomError::new("configuration did not validate"));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        let prefix_check = Regex::new(r"^[A-Za-z0-9_:.\-]{0,64}$")
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !prefix_check.is_match(&self.store.prefix) {
            return Err(ConfigurationError::ValidationError(format!("store prefix '{}' contains invalid characters", self.store.prefix)));
        }

        if self.store.bus_capacity == 0 {
            return Err(ConfigurationError::ValidationError("store bus_capacity must be greater than 0".to_string()));
        }

        if self.store.engine == StoreEngine::redis {
            let addresses = [
                ("address", self.redis.store_address()),
                ("publish_address", self.redis.publish_address()),
                ("subscribe_address", self.redis.subscribe_address()),
            ];
            for (name, address) in addresses {
                if address.trim().is_empty() {
                    return Err(ConfigurationError::ValidationError(format!("redis {} must not be empty", name)));
                }
            }
        }

        Ok(())
    }
}
