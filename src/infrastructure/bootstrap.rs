//! Composition root: builds the poll loop from configuration.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::notifier::telegram::notifier::TelegramNotifier;
use crate::adapter::outbound::practicum::client::PracticumClient;
use crate::app::{PollLoop, PollSettings};
use crate::infrastructure::config::settings::Config;
use crate::port::{Notifier, Sleeper, StatusSource, TokioSleeper};

/// Wire the review API client, Telegram notifier and tokio sleeper into a
/// ready-to-run [`PollLoop`].
pub fn build_poll_loop(config: &Config) -> PollLoop {
    let source: Arc<dyn StatusSource> = Arc::new(PracticumClient::from_config(config));
    let notifier: Arc<dyn Notifier> =
        Arc::new(TelegramNotifier::from_credentials(&config.credentials));
    let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);

    info!(
        endpoint = %config.endpoint,
        chat_id = config.credentials.chat_id,
        poll_interval_secs = config.polling.poll_interval_secs,
        "Components wired"
    );

    PollLoop::new(source, notifier, sleeper, PollSettings::from(config))
}
