//! Deterministic adapter fakes that count calls.

use async_trait::async_trait;
use embedding::EmbeddingService;
use model_adapters::{
    Capability, EmbeddingKeywordExtractor, KeywordExtractor, ModelAdapters, ModelError,
    ReplyGenerator, Result, Summarizer, TitleGenerator,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Text-derived outputs: reply echoes, summary is the first five words, title the first two
/// words capitalized. `fail` makes that capability return a request error.
pub struct FakeModels {
    pub calls: AtomicUsize,
    pub fail: Option<Capability>,
}

impl FakeModels {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: None,
        })
    }

    pub fn failing(capability: Capability) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: Some(capability),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, capability: Capability) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail == Some(capability) {
            return Err(ModelError::Request {
                capability,
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReplyGenerator for FakeModels {
    async fn generate_reply(&self, text: &str) -> Result<String> {
        self.enter(Capability::Reply)?;
        Ok(format!("You said: {}", text))
    }
}

#[async_trait]
impl Summarizer for FakeModels {
    async fn summarize(&self, text: &str) -> Result<String> {
        self.enter(Capability::Summary)?;
        Ok(text.split_whitespace().take(5).collect::<Vec<_>>().join(" "))
    }
}

#[async_trait]
impl TitleGenerator for FakeModels {
    async fn generate_title(&self, text: &str) -> Result<String> {
        self.enter(Capability::Title)?;
        let title = text
            .split_whitespace()
            .take(2)
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        Ok(title)
    }
}

#[async_trait]
impl KeywordExtractor for FakeModels {
    async fn extract_keywords(&self, _text: &str) -> Result<Vec<String>> {
        self.enter(Capability::Keywords)?;
        Ok(vec!["alpha".to_string(), "beta".to_string()])
    }
}

const VOCAB: [&str; 4] = ["quick", "brown", "fox", "dog"];

/// Embeds text as counts of each vocabulary word.
pub struct VocabEmbedding;

fn vocab_vector(text: &str) -> Vec<f32> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    VOCAB
        .iter()
        .map(|v| words.iter().filter(|w| *w == v).count() as f32)
        .collect()
}

#[async_trait]
impl EmbeddingService for VocabEmbedding {
    async fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| vocab_vector(t)).collect())
    }
}

/// All four capabilities served by `fake`.
pub fn adapters(fake: Arc<FakeModels>) -> ModelAdapters {
    ModelAdapters {
        reply: fake.clone(),
        summarizer: fake.clone(),
        title: fake.clone(),
        keywords: fake,
    }
}

/// Fake LLM capabilities with the real embedding-ranked keyword extractor.
pub fn adapters_with_real_keywords(fake: Arc<FakeModels>, top_n: usize) -> ModelAdapters {
    ModelAdapters {
        reply: fake.clone(),
        summarizer: fake.clone(),
        title: fake,
        keywords: Arc::new(EmbeddingKeywordExtractor::new(Arc::new(VocabEmbedding), top_n)),
    }
}
