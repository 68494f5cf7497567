//! # Embeddings
//!
//! [`EmbeddingService`] turns text into vectors. The keyword extractor embeds the document and
//! all candidate phrases in one [`EmbeddingService::embed_batch`] call and ranks by similarity.

use async_trait::async_trait;

mod config;
pub use config::{EmbeddingConfig, EnvEmbeddingConfig, DEFAULT_EMBEDDING_MODEL};

#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// One vector per input, in input order. An empty slice yields an empty result.
    async fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}
