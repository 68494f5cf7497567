//! App extensions: model-side config (LLM endpoints and models, embedding model, adapter bounds).
//! Each config type lives in its own crate; this module only bundles them.

use anyhow::Result;
use embedding::{EmbeddingConfig, EnvEmbeddingConfig};
use llm_client::{EnvLlmConfig, LlmConfig};
use model_adapters::AdapterConfig;

/// Application extension config. Implement this trait to inject custom config.
pub trait AppExtensions: Send + Sync {
    fn llm_config(&self) -> &dyn LlmConfig;
    fn embedding_config(&self) -> &dyn EmbeddingConfig;
    fn adapter_config(&self) -> &AdapterConfig;
}

/// Env-backed extensions used by the bot binary.
pub struct BaseAppExtensions {
    pub llm: EnvLlmConfig,
    pub embedding: EnvEmbeddingConfig,
    pub adapters: AdapterConfig,
}

impl AppExtensions for BaseAppExtensions {
    fn llm_config(&self) -> &dyn LlmConfig {
        &self.llm
    }
    fn embedding_config(&self) -> &dyn EmbeddingConfig {
        &self.embedding
    }
    fn adapter_config(&self) -> &AdapterConfig {
        &self.adapters
    }
}

impl BaseAppExtensions {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            llm: EnvLlmConfig::from_env()?,
            embedding: EnvEmbeddingConfig::from_env()?,
            adapters: AdapterConfig::from_env()?,
        })
    }
}
