//! Telegram transport: teloxide ↔ core conversions, the outbound [`crate::core::Bot`]
//! implementation, and the polling loop.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{run_repl, spawn_chain};
