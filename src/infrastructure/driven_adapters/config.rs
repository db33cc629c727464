//! Application Configuration
//!
//! Loads configuration from built-in defaults, optional files and
//! environment variables.

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::shared::errors::ConfigurationError;

/// Public chain list published by ethereum-lists
pub const DEFAULT_CHAIN_LIST_URL: &str = "https://chainid.network/chains.json";

/// Chain list endpoint configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChainListConfig {
    #[validate(url(message = "chain_list.url must be a valid URL"))]
    pub url: String,
    /// Request timeout; no timeout is applied when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ChainListConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ChainListConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CHAIN_LIST_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub chain_list: ChainListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Load` if a source cannot be read or
    /// deserialized, `ConfigurationError::Invalid` if validation fails.
    pub fn load() -> Result<Self, ConfigurationError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let config: Self = Config::builder()
            .set_default("chain_list.url", DEFAULT_CHAIN_LIST_URL)?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__CHAIN_LIST__URL)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
