//! Env-driven configuration. [`BaseConfig`] covers Telegram, logging and dispatch;
//! [`AppExtensions`] carries the LLM, embedding and adapter-bound settings.

mod base;
mod bot_config;
mod extensions;

#[cfg(test)]
mod tests;

pub use base::{BaseConfig, DEFAULT_LOG_FILE, DEFAULT_MAX_CONCURRENT_MESSAGES};
pub use bot_config::BotConfig;
pub use extensions::{AppExtensions, BaseAppExtensions};
