//! # Model adapters
//!
//! One trait per NLP capability, each a single text-in call:
//!
//! - [`ReplyGenerator`]: conversational reply (sampled);
//! - [`Summarizer`]: summary (deterministic, length-bounded);
//! - [`TitleGenerator`]: short title phrase (deterministic, trimmed);
//! - [`KeywordExtractor`]: ranked 1–2 word phrases, stop words removed.
//!
//! [`ModelAdapters`] bundles one shared instance of each; build it once at startup with
//! [`ModelAdapters::from_config`] and clone the `Arc`s into handlers.

use async_trait::async_trait;
use embedding::{EmbeddingConfig, EmbeddingService};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use openai_embedding::OpenAIEmbedding;
use std::sync::Arc;
use tracing::info;

mod config;
mod error;
mod keywords;
mod llm_adapters;
mod stop_words;

pub use config::AdapterConfig;
pub use error::{Capability, ModelError, Result};
pub use keywords::{candidate_phrases, cosine_similarity, tokenize, EmbeddingKeywordExtractor};
pub use llm_adapters::{LlmReplyGenerator, LlmSummarizer, LlmTitleGenerator};
pub use stop_words::{is_stop_word, ENGLISH_STOP_WORDS};

/// Generates a conversational reply to `text`. Errors on failure or empty output.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(&self, text: &str) -> Result<String>;
}

/// Summarizes `text`. Errors on failure or empty output.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Produces a short, whitespace-trimmed title for `text`.
#[async_trait]
pub trait TitleGenerator: Send + Sync {
    async fn generate_title(&self, text: &str) -> Result<String>;
}

/// Extracts distinct key phrases from `text`, most relevant first.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>>;
}

/// One shared, immutable instance of each adapter.
#[derive(Clone)]
pub struct ModelAdapters {
    pub reply: Arc<dyn ReplyGenerator>,
    pub summarizer: Arc<dyn Summarizer>,
    pub title: Arc<dyn TitleGenerator>,
    pub keywords: Arc<dyn KeywordExtractor>,
}

impl ModelAdapters {
    /// Builds OpenAI-compatible adapters from config.
    pub fn from_config(
        llm: &dyn LlmConfig,
        embedding: &dyn EmbeddingConfig,
        bounds: &AdapterConfig,
    ) -> Self {
        let client = |model: &str| -> Arc<dyn LlmClient> {
            Arc::new(
                OpenAILlmClient::with_base_url(
                    llm.api_key().to_string(),
                    llm.base_url().to_string(),
                )
                .with_model(model),
            )
        };
        let embedding_service: Arc<dyn EmbeddingService> = Arc::new(
            OpenAIEmbedding::new_with_base_url(
                embedding.openai_api_key().to_string(),
                embedding.model().to_string(),
                embedding.openai_base_url(),
            ),
        );

        info!(
            chat_model = %llm.chat_model(),
            summary_model = %llm.summary_model(),
            title_model = %llm.title_model(),
            embedding_model = %embedding.model(),
            "Initializing model adapters"
        );

        Self {
            reply: Arc::new(LlmReplyGenerator::new(
                client(llm.chat_model()),
                bounds.reply_max_tokens,
            )),
            summarizer: Arc::new(LlmSummarizer::new(
                client(llm.summary_model()),
                bounds.summary_max_tokens,
                bounds.summary_min_words,
            )),
            title: Arc::new(LlmTitleGenerator::new(
                client(llm.title_model()),
                bounds.title_max_tokens,
            )),
            keywords: Arc::new(EmbeddingKeywordExtractor::new(
                embedding_service,
                bounds.keyword_top_n,
            )),
        }
    }
}
