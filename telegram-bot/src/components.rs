//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use model_adapters::ModelAdapters;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::{AppExtensions, BotConfig};
use crate::core::Bot;
use crate::handlers::{CommandHandler, MetadataHandler};
use crate::telegram::TelegramBotAdapter;

/// Long-lived dependencies shared by every handler invocation.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Filled from getMe before the REPL starts.
    pub bot_username: Arc<RwLock<Option<String>>>,
    /// Outbound sends; the Telegram adapter unless overridden.
    pub handler_bot: Arc<dyn Bot>,
    pub models: ModelAdapters,
}

/// teloxide::Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
            info!(url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds the Telegram client and the model adapters once. `handler_bot_override` replaces the
/// Telegram adapter for outbound sends (tests).
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let handler_bot: Arc<dyn Bot> = match handler_bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };
    let ext = config.extensions();
    let models = ModelAdapters::from_config(
        ext.llm_config(),
        ext.embedding_config(),
        ext.adapter_config(),
    );

    Ok(BotComponents {
        teloxide_bot,
        bot_username: Arc::new(RwLock::new(None)),
        handler_bot,
        models,
    })
}

/// Builds the handler chain (commands → metadata).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(
            components.handler_bot.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(MetadataHandler::new(
            components.handler_bot.clone(),
            components.models.clone(),
        )))
}
