//! `/start` and `/help`. Any other slash command is swallowed without a reply; text where `/`
//! is not followed by a letter (`/ hello`, `/5`) is ordinary text.

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::metadata::{GREETING_TEXT, HELP_TEXT};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Commands registered with Telegram.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "say hello")]
    Start,
    #[command(description = "explain how to use the bot")]
    Help,
}

impl Command {
    pub fn reply_text(&self) -> &'static str {
        match self {
            Command::Start => GREETING_TEXT,
            Command::Help => HELP_TEXT,
        }
    }
}

/// Answers known commands and stops the chain for every message that looks like a command.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    /// `bot_username` is filled by the runner after getMe; `/cmd@<name>` only matches once it is known.
    pub fn new(bot: Arc<dyn Bot>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot, bot_username }
    }
}

/// `/` immediately followed by an ASCII letter, the shape Telegram marks as a bot command.
fn looks_like_command(text: &str) -> bool {
    text.strip_prefix('/')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !looks_like_command(&message.content) {
            return Ok(HandlerResponse::Continue);
        }
        let username = self.bot_username.read().await.clone().unwrap_or_default();
        let head = message.content.split_whitespace().next().unwrap_or_default();
        match Command::parse(head, &username) {
            Ok(command) => {
                info!(chat_id = message.chat.id, command = ?command, "Command received");
                let text = command.reply_text();
                self.bot.reply_to(message, text).await?;
                Ok(HandlerResponse::Reply(text.to_string()))
            }
            Err(e) => {
                debug!(chat_id = message.chat.id, error = %e, "Ignoring unsupported command");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
