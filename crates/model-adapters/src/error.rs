//! Adapter errors.

use std::fmt;
use thiserror::Error;

/// The NLP capability an adapter exposes; used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Reply,
    Summary,
    Title,
    Keywords,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Reply => "reply generation",
            Capability::Summary => "summarization",
            Capability::Title => "title generation",
            Capability::Keywords => "keyword extraction",
        };
        f.write_str(name)
    }
}

/// Failure of a single adapter call. Fatal for the message being processed.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{capability} request failed: {message}")]
    Request {
        capability: Capability,
        message: String,
    },

    #[error("{0} returned empty output")]
    EmptyOutput(Capability),

    #[error("Embedding error: {0}")]
    Embedding(String),
}

impl ModelError {
    /// Wraps a client error, keeping the whole cause chain in the message.
    pub fn request(capability: Capability, err: anyhow::Error) -> Self {
        ModelError::Request {
            capability,
            message: format!("{:#}", err),
        }
    }
}

/// Result type for adapter calls.
pub type Result<T> = std::result::Result<T, ModelError>;
