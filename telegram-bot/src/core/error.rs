//! Error types for the bot core.
//!
//! [`DbotError`] is the single error type returned by handlers and the `Bot` trait.

use model_adapters::ModelError;
use thiserror::Error;

/// Top-level error for the bot (transport or model adapters).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
