//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Append log output to this file instead of stdout.
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    #[allow(clippy::result_large_err)]
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let file = match &self.file {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ConfigError::InvalidValue {
                        field: "logging.file",
                        reason: format!("cannot open {path}: {e}"),
                    })?,
            ),
            None => None,
        };

        let builder = fmt().with_env_filter(filter);
        match (self.format.as_str(), file) {
            ("json", Some(file)) => builder
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init(),
            ("json", None) => builder.json().init(),
            (_, Some(file)) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            (_, None) => builder.init(),
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
            file: None,
        }
    }
}
