//! Telegram delivery.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::info;

use crate::config::Config;

/// Sends the finished report to the configured chat.
///
/// Delivery is the one step with no fallback: a send failure propagates to
/// the caller untouched.
pub struct ReportSender {
    bot: Bot,
    chat_id: ChatId,
}

impl ReportSender {
    pub fn new(config: &Config) -> Self {
        Self {
            bot: Bot::new(config.token.clone()),
            chat_id: ChatId(config.chat_id),
        }
    }

    /// One `sendMessage` call; the report text carries legacy Markdown
    /// markers (`*bold*`) that the chat renders.
    pub async fn send(&self, text: &str) -> Result<(), teloxide::RequestError> {
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Markdown)
            .await?;

        info!(chat_id = self.chat_id.0, "report delivered");
        Ok(())
    }
}
