//! Reviewbot - homework review notifications over Telegram.
//!
//! Polls a homework review API for status changes and relays each new
//! verdict to a Telegram chat.
//!
//! # Modules
//!
//! - [`domain`] - Records, verdicts, the timestamp cursor and message text
//! - [`port`] - Traits for the status source, notifier and sleeper
//! - [`adapter`] - Review API client and Telegram notifier
//! - [`app`] - Status fetcher and the poll loop
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use reviewbot::infrastructure::bootstrap::build_poll_loop;
//! use reviewbot::infrastructure::config::settings::Config;
//!
//! # async fn run() -> reviewbot::error::Result<()> {
//! let config = Config::load("reviewbot.toml")?;
//! build_poll_loop(&config).run().await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
