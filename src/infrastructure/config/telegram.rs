//! Credentials read from the process environment.

use std::fmt;

use crate::error::{ConfigError, Result};

pub const PRAKTIKUM_TOKEN: &str = "PRAKTIKUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Secrets needed to talk to the review API and the Telegram bot.
///
/// Never read from the config file.
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth token for the review API.
    pub api_token: String,
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
}

impl Credentials {
    /// Read `PRAKTIKUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    #[allow(clippy::result_large_err)]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar { name })
        };

        let api_token = require(PRAKTIKUM_TOKEN)?;
        let bot_token = require(TELEGRAM_TOKEN)?;
        let chat_id = require(TELEGRAM_CHAT_ID)?;
        let chat_id = chat_id
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: TELEGRAM_CHAT_ID,
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_token,
            bot_token,
            chat_id,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
