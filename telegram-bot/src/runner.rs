//! Application entry: validate config, init logging, build components, run the REPL.

use anyhow::Result;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::Command;
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, build components and handler chain, then run the REPL
/// until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        max_concurrent_messages = config.max_concurrent_messages(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;
    let handler_chain = build_handler_chain(&components);

    info!("Bot started successfully");

    run_repl(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
        Command::bot_commands(),
        config.max_concurrent_messages(),
    )
    .await
}

/// Validates config and builds the handler chain without logging init or the REPL. Integration
/// tests pass a recording `Bot` as `handler_bot_override` and drive the chain directly.
pub fn run_bot_build_only(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<HandlerChain> {
    config.validate()?;
    let components = build_bot_components(config, handler_bot_override)?;
    Ok(build_handler_chain(&components))
}
