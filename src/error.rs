use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Problems with a single homework record returned by the review API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Malformed homework record{}: missing field `{field}`", quoted_name(.name))]
    MissingField {
        field: &'static str,
        name: Option<String>,
    },

    #[error("Unknown homework status \"{status}\" for \"{name}\"")]
    UnknownStatus { name: String, status: String },
}

fn quoted_name(name: &Option<String>) -> String {
    name.as_deref()
        .map(|n| format!(" \"{n}\""))
        .unwrap_or_default()
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("review API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram delivery failed: {0}")]
    Notify(#[from] teloxide::RequestError),
}

/// What the poll loop does after an iteration fails with a given error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Stop polling and hand the error back to the caller.
    ///
    /// Only configuration errors map here, and those are raised before the
    /// loop starts.
    Abort,
    /// Log, send a best-effort alert to the chat, wait the retry delay.
    AlertAndRetry,
}

impl Error {
    /// Map this error to the action the poll loop takes for it.
    #[must_use]
    pub fn recovery(&self) -> Recovery {
        match self {
            Error::Config(_) => Recovery::Abort,
            Error::Transport(_) | Error::Notify(_) => Recovery::AlertAndRetry,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
