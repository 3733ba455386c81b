//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for notification backends.

pub mod telegram;
