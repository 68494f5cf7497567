//! Per-message orchestration: ack, conversational reply, then title/summary/tags.

use crate::core::{logger::format_local, Bot, Handler, HandlerResponse, Message, Result};
use crate::metadata::{
    MetadataRecord, ACK_TEXT, FAILURE_TEXT, METADATA_HEADER, RESPONSE_PREFIX,
};
use async_trait::async_trait;
use model_adapters::ModelAdapters;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Terminal handler for non-command text. Returns `Reply(metadata)` on success.
pub struct MetadataHandler {
    bot: Arc<dyn Bot>,
    models: ModelAdapters,
}

impl MetadataHandler {
    pub fn new(bot: Arc<dyn Bot>, models: ModelAdapters) -> Self {
        Self { bot, models }
    }

    /// Summary, title and tags for `text`, computed in that order.
    pub async fn metadata_for(&self, text: &str) -> Result<MetadataRecord> {
        let summary = self.models.summarizer.summarize(text).await?;
        let title = self.models.title.generate_title(text).await?;
        let tags = self.models.keywords.extract_keywords(text).await?;
        Ok(MetadataRecord::new(title, summary, tags))
    }

    async fn process(&self, message: &Message) -> Result<String> {
        let text = message.content.as_str();

        self.bot.reply_to(message, ACK_TEXT).await?;

        let reply = self.models.reply.generate_reply(text).await?;
        self.bot
            .reply_to(message, &format!("{}{}", RESPONSE_PREFIX, reply))
            .await?;

        let metadata = self.metadata_for(text).await?.to_string();
        self.bot.reply_to(message, METADATA_HEADER).await?;
        self.bot.reply_to(message, &metadata).await?;
        Ok(metadata)
    }
}

#[async_trait]
impl Handler for MetadataHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            sender = %message.user.display_name(),
            received_at = %format_local(&chrono::Local::now()),
            text = ?message.content,
            "Received message"
        );

        match self.process(message).await {
            Ok(metadata) => {
                info!(metadata_len = metadata.len(), "Metadata sent");
                Ok(HandlerResponse::Reply(metadata))
            }
            Err(e) => {
                error!(error = %e, "Processing aborted");
                if let Err(send_err) = self.bot.reply_to(message, FAILURE_TEXT).await {
                    warn!(error = %send_err, "Failed to send failure notice");
                }
                Err(e)
            }
        }
    }
}
