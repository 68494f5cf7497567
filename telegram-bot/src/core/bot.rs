//! Outbound messaging abstraction.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `crate::telegram`.

use crate::core::error::Result;
use crate::core::types::Message;
use async_trait::async_trait;

/// Sends replies. Implementations map to a transport (e.g. Telegram); tests use a recording mock.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` to the chat of `message`, quoting `message` so concurrent replies in the
    /// same chat stay attributable.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}
