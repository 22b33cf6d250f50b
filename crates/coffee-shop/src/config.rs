//! # Shop Configuration
//!
//! Runtime settings, loaded from multiple sources with precedence:
//! 1. Default values
//! 2. Configuration file (`coffee-shop.toml`, optional)
//! 3. Environment variables (prefixed with `COFFEE_SHOP_`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "coffee-shop";
const ENV_PREFIX: &str = "COFFEE_SHOP";

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Mailbox size of the order actor. Callers wait when it is full.
    pub channel_capacity: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from defaults, `coffee-shop.toml` and the
    /// environment, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::build(builder)
    }

    /// Rejects settings the shop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Message(
                "channel_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("channel_capacity", DEFAULT_CHANNEL_CAPACITY as i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let shop_config: ShopConfig = builder.build()?.try_deserialize()?;
        shop_config.validate()?;
        Ok(shop_config)
    }
}
