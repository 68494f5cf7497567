//! Full application config.

use anyhow::Result;

use super::{AppExtensions, BaseAppExtensions, BaseConfig};

/// Transport settings plus model-side extensions, both read from env.
pub struct BotConfig {
    pub base: BaseConfig,
    pub extensions: BaseAppExtensions,
}

impl BotConfig {
    /// Reads env once. `token`, when given, wins over BOT_TOKEN. Fails if no token is available.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            extensions: BaseAppExtensions::from_env()?,
        })
    }

    /// Checks URL syntax and non-zero bounds. Run before logging or any network setup.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.extensions.adapter_config().validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn extensions(&self) -> &BaseAppExtensions {
        &self.extensions
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }

    pub fn max_concurrent_messages(&self) -> usize {
        self.base.max_concurrent_messages
    }
}
