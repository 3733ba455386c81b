//! Poll cadence and record delivery settings.

use std::time::Duration;

use serde::Deserialize;

const fn default_poll_interval_secs() -> u64 {
    300
}

const fn default_retry_delay_secs() -> u64 {
    5
}

const fn default_request_timeout_secs() -> u64 {
    30
}

/// Timing policy of the poll loop.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Pause between successful iterations (default: 300).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Pause after a failure before polling again (default: 5).
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    /// Timeout for one request to the review API (default: 30).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl PollingConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            retry_delay_secs: default_retry_delay_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Which records of a status page get a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Only the newest record. Older records in the same page are skipped
    /// and never resurface because the cursor moves past them.
    #[default]
    Latest,
    /// Every record in the page, in the order the API lists them.
    All,
}
