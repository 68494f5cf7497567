//! Completion-backed adapters: reply, summary and title, each over an [`LlmClient`].

use async_trait::async_trait;
use llm_client::{CompletionOptions, LlmClient};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{Capability, ModelError, Result};
use crate::{ReplyGenerator, Summarizer, TitleGenerator};

/// Trims the model output and rejects it when nothing is left.
fn non_empty(capability: Capability, output: String) -> Result<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        warn!(capability = %capability, "model returned empty output");
        return Err(ModelError::EmptyOutput(capability));
    }
    Ok(trimmed.to_string())
}

/// Sampled conversational reply, bounded to `max_tokens`.
pub struct LlmReplyGenerator {
    client: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl LlmReplyGenerator {
    pub fn new(client: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }
}

#[async_trait]
impl ReplyGenerator for LlmReplyGenerator {
    #[instrument(skip(self, text), fields(model = %self.client.model(), text_len = text.len()))]
    async fn generate_reply(&self, text: &str) -> Result<String> {
        let output = self
            .client
            .get_llm_response_with_messages(
                prompt::reply_messages(text),
                CompletionOptions::sampled(self.max_tokens),
            )
            .await
            .map_err(|e| ModelError::request(Capability::Reply, e))?;
        let reply = non_empty(Capability::Reply, output)?;
        info!(reply_len = reply.len(), "step: reply generated");
        Ok(reply)
    }
}

/// Greedy summary between `min_words` (prompted) and `max_tokens` (enforced by the API).
pub struct LlmSummarizer {
    client: Arc<dyn LlmClient>,
    max_tokens: u32,
    min_words: u32,
}

impl LlmSummarizer {
    pub fn new(client: Arc<dyn LlmClient>, max_tokens: u32, min_words: u32) -> Self {
        Self {
            client,
            max_tokens,
            min_words,
        }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    #[instrument(skip(self, text), fields(model = %self.client.model(), text_len = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String> {
        let output = self
            .client
            .get_llm_response_with_messages(
                prompt::summary_messages(text, self.min_words),
                CompletionOptions::deterministic(self.max_tokens),
            )
            .await
            .map_err(|e| ModelError::request(Capability::Summary, e))?;
        let summary = non_empty(Capability::Summary, output)?;
        info!(summary_len = summary.len(), "step: summary generated");
        Ok(summary)
    }
}

/// Greedy one-phrase title bounded to a few tokens.
pub struct LlmTitleGenerator {
    client: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl LlmTitleGenerator {
    pub fn new(client: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }
}

#[async_trait]
impl TitleGenerator for LlmTitleGenerator {
    #[instrument(skip(self, text), fields(model = %self.client.model(), text_len = text.len()))]
    async fn generate_title(&self, text: &str) -> Result<String> {
        let output = self
            .client
            .get_llm_response_with_messages(
                prompt::title_messages(text),
                CompletionOptions::deterministic(self.max_tokens),
            )
            .await
            .map_err(|e| ModelError::request(Capability::Title, e))?;
        let title = non_empty(Capability::Title, output)?;
        info!(title = %title, "step: title generated");
        Ok(title)
    }
}
