//! Base config: Telegram connection, logging, dispatch bound. Loaded from env.

use anyhow::Result;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/bot.log";
pub const DEFAULT_MAX_CONCURRENT_MESSAGES: usize = 4;

/// Base config: Telegram-related, logging and concurrency only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// MAX_CONCURRENT_MESSAGES
    pub max_concurrent_messages: usize,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing or blank token is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let max_concurrent_messages = env::var("MAX_CONCURRENT_MESSAGES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_CONCURRENT_MESSAGES);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            max_concurrent_messages,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set; concurrency ≥ 1).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.max_concurrent_messages == 0 {
            anyhow::bail!("MAX_CONCURRENT_MESSAGES must be greater than zero");
        }
        Ok(())
    }
}
