//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{Bot as CoreBot, DbotError, Message, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Telegram id of the message being answered.
fn reply_target(message: &Message) -> Result<MessageId> {
    message
        .id
        .parse()
        .map(MessageId)
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for reply: {}", message.id)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let target = reply_target(message)?;
        self.bot
            .send_message(ChatId(message.chat.id), text)
            .reply_parameters(ReplyParameters::new(target))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
