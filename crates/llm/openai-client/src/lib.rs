//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion against any
//! OpenAI-compatible endpoint. Each call carries its own [`CompletionOptions`] so one client can
//! serve both sampled (reply) and deterministic (summary, title) requests.
//! Provides token masking for safe logging.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;

pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Decoding parameters for a single completion request. `None` leaves the server default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionOptions {
    /// Upper bound on generated tokens.
    pub max_tokens: Option<u32>,
    /// Sampling temperature; `0.0` asks for deterministic (greedy) decoding.
    pub temperature: Option<f32>,
}

impl CompletionOptions {
    /// Sampled decoding bounded to `max_tokens`.
    pub fn sampled(max_tokens: u32) -> Self {
        Self {
            max_tokens: Some(max_tokens),
            temperature: Some(1.0),
        }
    }

    /// Greedy decoding bounded to `max_tokens`.
    pub fn deterministic(max_tokens: u32) -> Self {
        Self {
            max_tokens: Some(max_tokens),
            temperature: Some(0.0),
        }
    }
}

/// OpenAI chat client. Wraps the async-openai client and keeps the API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client against `base_url` (the OpenAI API or a local compatible server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging: api_key,
        }
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// Logs masked API key, request JSON (debug) and token usage. A choice without content
    /// yields an empty string; callers decide whether that is an error.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        options: CompletionOptions,
    ) -> anyhow::Result<String> {
        let masked = mask_token(&self.api_key_for_logging);

        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = ?options.max_tokens,
            temperature = ?options.temperature,
            api_key = %masked,
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(max_tokens) = options.max_tokens {
            #[allow(deprecated)]
            args.max_tokens(max_tokens);
        }
        if let Some(temperature) = options.temperature {
            args.temperature(temperature);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
