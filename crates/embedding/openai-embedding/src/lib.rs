//! # OpenAI Embedding Service
//!
//! [`EmbeddingService`] over the OpenAI embeddings endpoint (or any compatible server via a
//! base URL). Used by the keyword extractor, which embeds the document and all of its candidate
//! phrases in a single [`EmbeddingService::embed_batch`] call.
//!
//! ```rust,no_run
//! use embedding::EmbeddingService;
//! use openai_embedding::OpenAIEmbedding;
//!
//! async fn example() -> Result<(), anyhow::Error> {
//!     let service = OpenAIEmbedding::new_with_base_url(
//!         "sk-...".to_string(),
//!         "text-embedding-3-small".to_string(),
//!         None,
//!     );
//!     let vectors = service
//!         .embed_batch(&["quick brown fox".to_string(), "fox".to_string()])
//!         .await?;
//!     assert_eq!(vectors.len(), 2);
//!     Ok(())
//! }
//! ```

use async_openai::{types::CreateEmbeddingRequestArgs, Client};
use async_trait::async_trait;
use embedding::EmbeddingService;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Timeout for a batch request (connect + request + response).
const EMBED_BATCH_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI embedding service implementation. Holds the async-openai client and model name.
#[derive(Debug, Clone)]
pub struct OpenAIEmbedding {
    client: Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl OpenAIEmbedding {
    /// Creates a new embedding service; when `base_url` is `Some`, requests go there instead
    /// of the default OpenAI API.
    ///
    /// An empty `api_key` falls back to the OPENAI_API_KEY environment variable.
    pub fn new_with_base_url(api_key: String, model: String, base_url: Option<&str>) -> Self {
        let api_key = if api_key.is_empty() {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        } else {
            api_key
        };

        let mut openai_config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        if let Some(url) = base_url.filter(|s| !s.is_empty()) {
            openai_config = openai_config.with_api_base(url);
        }

        Self {
            client: Client::with_config(openai_config),
            model,
        }
    }

    async fn request(
        &self,
        inputs: &[String],
        timeout: Duration,
    ) -> Result<Vec<Vec<f32>>, anyhow::Error> {
        let expected = inputs.len();
        let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.clone())
            .input(inputs)
            .build()?;

        let embeddings = self.client.embeddings();
        let response = match tokio::time::timeout(timeout, embeddings.create(request)).await {
            Ok(Ok(r)) => {
                debug!("OpenAI embed response received");
                r
            }
            Ok(Err(e)) => {
                warn!(error = %e, "OpenAI embed request failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_secs = timeout.as_secs(), "OpenAI embed request timed out");
                return Err(anyhow::anyhow!(
                    "OpenAI embed request timed out after {} seconds",
                    timeout.as_secs()
                ));
            }
        };

        let mut data = response.data;
        data.sort_by_key(|item| item.index);
        let vectors: Vec<Vec<f32>> = data.into_iter().map(|item| item.embedding).collect();

        if vectors.len() != expected {
            warn!(expected, got = vectors.len(), "OpenAI embed response count mismatch");
            return Err(anyhow::anyhow!(
                "Expected {} embeddings, got {}",
                expected,
                vectors.len()
            ));
        }
        Ok(vectors)
    }
}

#[async_trait]
impl EmbeddingService for OpenAIEmbedding {
    #[instrument(skip(self, texts), fields(model = %self.model, batch_size = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error> {
        if texts.is_empty() {
            debug!("OpenAI embed_batch empty input, skipping");
            return Ok(vec![]);
        }

        info!(
            model = %self.model,
            batch_size = texts.len(),
            "step: embedding OpenAI embed_batch request"
        );
        let vectors = self.request(texts, EMBED_BATCH_TIMEOUT).await?;
        info!(
            count = vectors.len(),
            dimension = vectors.first().map(|v| v.len()).unwrap_or(0),
            "step: embedding OpenAI embed_batch done"
        );
        Ok(vectors)
    }
}
