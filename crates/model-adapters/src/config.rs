//! Output bounds for the adapters, loaded from env.

use anyhow::Result;
use std::env;

/// Length bounds and ranking size for the four adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// REPLY_MAX_TOKENS
    pub reply_max_tokens: u32,
    /// SUMMARY_MAX_TOKENS
    pub summary_max_tokens: u32,
    /// SUMMARY_MIN_WORDS
    pub summary_min_words: u32,
    /// TITLE_MAX_TOKENS
    pub title_max_tokens: u32,
    /// KEYWORD_TOP_N
    pub keyword_top_n: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            reply_max_tokens: 500,
            summary_max_tokens: 500,
            summary_min_words: 5,
            title_max_tokens: 10,
            keyword_top_n: 5,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AdapterConfig {
    /// Load from environment variables; unparsable values fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            reply_max_tokens: parse_or("REPLY_MAX_TOKENS", d.reply_max_tokens),
            summary_max_tokens: parse_or("SUMMARY_MAX_TOKENS", d.summary_max_tokens),
            summary_min_words: parse_or("SUMMARY_MIN_WORDS", d.summary_min_words),
            title_max_tokens: parse_or("TITLE_MAX_TOKENS", d.title_max_tokens),
            keyword_top_n: parse_or("KEYWORD_TOP_N", d.keyword_top_n),
        })
    }

    /// Rejects zero bounds.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("REPLY_MAX_TOKENS", self.reply_max_tokens as usize),
            ("SUMMARY_MAX_TOKENS", self.summary_max_tokens as usize),
            ("TITLE_MAX_TOKENS", self.title_max_tokens as usize),
            ("KEYWORD_TOP_N", self.keyword_top_n),
        ] {
            if value == 0 {
                anyhow::bail!("{} must be greater than zero", name);
            }
        }
        Ok(())
    }
}
