//! LLM configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

use crate::openai_llm::DEFAULT_MODEL;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    /// Model for conversational replies.
    fn chat_model(&self) -> &str;
    /// Model for summaries.
    fn summary_model(&self) -> &str;
    /// Model for titles.
    fn title_model(&self) -> &str;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub chat_model: String,
    pub summary_model: String,
    pub title_model: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn chat_model(&self) -> &str {
        &self.chat_model
    }
    fn summary_model(&self) -> &str {
        &self.summary_model
    }
    fn title_model(&self) -> &str {
        &self.title_model
    }
}

/// Reads a non-blank env var.
fn non_blank(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl EnvLlmConfig {
    /// Load from environment variables. SUMMARY_MODEL falls back to CHAT_MODEL, TITLE_MODEL to SUMMARY_MODEL.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_base_url = non_blank("OPENAI_BASE_URL")
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let chat_model = non_blank("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let summary_model = non_blank("SUMMARY_MODEL").unwrap_or_else(|| chat_model.clone());
        let title_model = non_blank("TITLE_MODEL").unwrap_or_else(|| summary_model.clone());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            chat_model,
            summary_model,
            title_model,
        })
    }
}
