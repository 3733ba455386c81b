//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Non-secret settings come from an optional TOML file; the API token, bot
//! token and chat ID always come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use reviewbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("reviewbot.toml")?;
//!     config.logging.init()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::logging::LoggingConfig;
use super::polling::{DeliveryMode, PollingConfig};
use super::telegram::Credentials;
use crate::error::{ConfigError, Result};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_VAR: &str = "REVIEWBOT_CONFIG";

/// Settings file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "reviewbot.toml";

fn default_endpoint() -> String {
    "https://praktikum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Homework status endpoint of the review API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Which records of each status page are announced.
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// Poll cadence and timeouts.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Secrets, filled from the environment by [`Config::load`].
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            delivery: DeliveryMode::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    /// Parse and validate settings without touching the environment.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from `path` (defaults when the file does not exist) and
    /// credentials from the environment.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            Self::parse_toml(&content)?
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.credentials = Credentials::from_env()?;
        Ok(config)
    }

    /// Resolve the settings path from [`CONFIG_PATH_VAR`].
    #[must_use]
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidValue {
            field: "endpoint",
            reason: e.to_string(),
        })?;

        if self.polling.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.polling.retry_delay_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_delay_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.polling.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
