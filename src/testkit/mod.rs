//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — `ScriptedSource`, a [`StatusSource`](crate::port::StatusSource)
//!   that replays pages and transport failures.
//! - [`notifier`] — `RecordingNotifier`, captures outgoing messages and can be
//!   told to fail deliveries.
//! - [`sleeper`] — `RecordingSleeper`, records requested delays and returns at once.
//! - [`domain`] — Builders for records, pages and errors.

pub mod domain;
pub mod notifier;
pub mod sleeper;
pub mod source;
