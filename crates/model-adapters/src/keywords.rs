//! Embedding-ranked keyword extraction.
//!
//! Candidates are the distinct 1- and 2-word phrases of the text after lowercasing, tokenizing
//! on runs of at least two word characters and dropping English stop words (bigrams are formed
//! from the remaining tokens). The document and every candidate are embedded in one batch and
//! candidates are ranked by cosine similarity to the document.

use async_trait::async_trait;
use embedding::EmbeddingService;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{Capability, ModelError, Result};
use crate::stop_words::is_stop_word;
use crate::KeywordExtractor;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

/// Lowercase tokens of `text` with stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(String::from)
        .collect()
}

/// Distinct unigram and bigram candidates, unigrams first, each in order of first occurrence.
pub fn candidate_phrases(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let bigrams = tokens.windows(2).map(|w| format!("{} {}", w[0], w[1]));

    let mut seen = HashSet::new();
    tokens
        .iter()
        .cloned()
        .chain(bigrams)
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Cosine similarity; 0.0 when either vector has zero norm or lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// [`KeywordExtractor`] ranking local candidates with an [`EmbeddingService`].
pub struct EmbeddingKeywordExtractor {
    embedding: Arc<dyn EmbeddingService>,
    top_n: usize,
}

impl EmbeddingKeywordExtractor {
    pub fn new(embedding: Arc<dyn EmbeddingService>, top_n: usize) -> Self {
        Self { embedding, top_n }
    }

    /// Candidates with their similarity to the document, highest first.
    pub async fn ranked_candidates(&self, text: &str) -> Result<Vec<(String, f32)>> {
        let candidates = candidate_phrases(text);
        if candidates.is_empty() {
            debug!("no keyword candidates, skipping embedding");
            return Ok(Vec::new());
        }

        let mut inputs = Vec::with_capacity(candidates.len() + 1);
        inputs.push(text.to_string());
        inputs.extend(candidates.iter().cloned());

        let vectors = self
            .embedding
            .embed_batch(&inputs)
            .await
            .map_err(|e| ModelError::request(Capability::Keywords, e))?;
        if vectors.len() != inputs.len() {
            return Err(ModelError::Embedding(format!(
                "expected {} embeddings, got {}",
                inputs.len(),
                vectors.len()
            )));
        }

        let (doc, rest) = vectors.split_first().ok_or_else(|| {
            ModelError::Embedding("empty embedding response".to_string())
        })?;
        let mut scored: Vec<(String, f32)> = candidates
            .into_iter()
            .zip(rest)
            .map(|(phrase, v)| {
                let score = cosine_similarity(doc, v);
                (phrase, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scored)
    }
}

#[async_trait]
impl KeywordExtractor for EmbeddingKeywordExtractor {
    #[instrument(skip(self, text), fields(text_len = text.len(), top_n = self.top_n))]
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>> {
        let tags: Vec<String> = self
            .ranked_candidates(text)
            .await?
            .into_iter()
            .take(self.top_n)
            .map(|(phrase, _score)| phrase)
            .collect();
        info!(tags = ?tags, "step: keywords extracted");
        Ok(tags)
    }
}
