//! The [`Handler`] trait and conversions from transport types into core types.

use async_trait::async_trait;

use super::{HandlerResponse, Message, User};
use crate::core::error::Result;

/// Builds a core [`User`] from a transport user.
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Builds a core [`Message`] from a transport message.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One link of a [`crate::chain::HandlerChain`]. Every phase is optional.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Gate run for every handler before any `handle`; `false` stops the chain.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// Main work. `Stop` or `Reply` ends the handle phase.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Sees the final response; run in reverse registration order.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
