//! # Telegram metadata bot
//!
//! Core (Handler, Bot, Message), chain (HandlerChain), telegram (run_repl, adapters), config,
//! handlers (commands, metadata) and the runner that wires them to the model adapters.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod metadata;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    run_repl, spawn_chain, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use config::{AppExtensions, BaseAppExtensions, BaseConfig, BotConfig};
pub use runner::{run_bot, run_bot_build_only};

pub use components::{build_bot_components, build_handler_chain, build_teloxide_bot, BotComponents};
pub use handlers::{Command, CommandHandler, MetadataHandler};
pub use metadata::MetadataRecord;
