//! Telegram message delivery.

use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::infrastructure::config::telegram::Credentials;
use crate::port::Notifier;

/// Telegram notifier that sends plain-text messages to one chat.
///
/// The bot client is built once and reused for every message.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(bot_token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(chat_id),
        }
    }

    #[must_use]
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(&credentials.bot_token, credentials.chat_id)
    }

    /// Destination chat.
    #[must_use]
    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        debug!(chat_id = self.chat_id.0, "Telegram message sent");
        Ok(())
    }
}
