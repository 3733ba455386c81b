//! Telegram bot integration for delivering homework notifications.

pub mod notifier;
