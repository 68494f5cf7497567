//! REPL runner: converts teloxide text messages to core::Message and passes each to the
//! HandlerChain in its own task, bounded by a semaphore.

use crate::chain::HandlerChain;
use crate::core::{Message, ToCoreMessage};
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tokio::sync::{RwLock, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs `chain` on `message` in a new task once a permit from `limit` is available.
/// Errors are logged, not propagated.
pub fn spawn_chain(chain: HandlerChain, limit: Arc<Semaphore>, message: Message) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _permit = match limit.acquire_owned().await {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "Dispatch semaphore closed");
                return;
            }
        };
        debug!(chat_id = message.chat.id, message_id = %message.id, "step: processing message");
        if let Err(e) = chain.handle(&message).await {
            error!(
                error = %e,
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Handler chain failed"
            );
        }
    })
}

/// Starts the REPL.
///
/// Before polling: caches the bot username from getMe and registers `commands` with Telegram
/// (both best effort). Non-text updates are skipped. At most `max_concurrent` chains run at once.
#[instrument(skip(bot, handler_chain, bot_username, commands))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
    commands: Vec<BotCommand>,
    max_concurrent: usize,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed, bot username unknown"),
    }

    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let limit = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();
        let limit = limit.clone();
        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return respond(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            spawn_chain(chain, limit, core_msg);
            respond(())
        }
    })
    .await;

    Ok(())
}
