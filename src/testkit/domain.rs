//! Builders for domain primitives and errors used across tests.

use teloxide::{ApiError, RequestError};

use crate::domain::{HomeworkRecord, StatusPage};
use crate::error::Error;

/// Create a complete record.
pub fn record(name: &str, status: &str) -> HomeworkRecord {
    HomeworkRecord::new(name, status)
}

/// Create a page holding `records`, optionally reporting `current_date`.
pub fn page(records: Vec<HomeworkRecord>, current_date: Option<i64>) -> StatusPage {
    StatusPage {
        homeworks: records,
        current_date,
    }
}

/// A real `reqwest` error, produced without touching the network.
pub fn transport_error() -> Error {
    match reqwest::Client::new().get("not a url").build() {
        Err(e) => Error::Transport(e),
        Ok(_) => unreachable!("relative URL must fail to build"),
    }
}

/// A Telegram delivery error.
pub fn notify_error() -> Error {
    Error::Notify(RequestError::Api(ApiError::BotBlocked))
}
