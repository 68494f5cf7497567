//! Embedding configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Default model for OpenAI-compatible embeddings.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Embedding service configuration interface.
pub trait EmbeddingConfig: Send + Sync {
    /// API key for the OpenAI-compatible embedding endpoint (OPENAI_API_KEY).
    fn openai_api_key(&self) -> &str;
    /// Optional base URL (OPENAI_BASE_URL); None means the default OpenAI API.
    fn openai_base_url(&self) -> Option<&str>;
    /// Embedding model (EMBEDDING_MODEL).
    fn model(&self) -> &str;
}

/// Embedding config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvEmbeddingConfig {
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub embedding_model: String,
}

impl EmbeddingConfig for EnvEmbeddingConfig {
    fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn openai_base_url(&self) -> Option<&str> {
        self.openai_base_url.as_deref().filter(|s| !s.is_empty())
    }
    fn model(&self) -> &str {
        &self.embedding_model
    }
}

impl EnvEmbeddingConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let embedding_model = env::var("EMBEDDING_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            embedding_model,
        })
    }
}
