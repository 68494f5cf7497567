//! Fixed reply texts and the metadata record sent after each conversational reply.

use std::fmt;

/// Reply to `/start`.
pub const GREETING_TEXT: &str = "Hello! I'm a conversational and metadata generator bot. Send me any text, and I'll chat with you and generate metadata based on your input!\nMade with 💖 by Asrar";

/// Reply to `/help`.
pub const HELP_TEXT: &str = "To use this bot, simply send a message with some text or a question. I'll reply to you and generate metadata based on your input.";

/// Acknowledgement sent before any model call.
pub const ACK_TEXT: &str = "Generating response and metadata...";

/// Prefix of the conversational reply message.
pub const RESPONSE_PREFIX: &str = "Response:\n";

/// Header sent right before the metadata message.
pub const METADATA_HEADER: &str = "Metadata:";

/// Sent once, best effort, when processing a message fails part way.
pub const FAILURE_TEXT: &str =
    "Sorry, something went wrong while processing your message. Please try again later.";

/// Title, summary and tags derived from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl MetadataRecord {
    pub fn new(title: String, summary: String, tags: Vec<String>) -> Self {
        Self {
            title,
            summary,
            tags,
        }
    }
}

/// Renders as three Markdown-style lines; tags joined by `", "`.
impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**Title**: {}\n**Summary**: {}\n**Tags**: {}",
            self.title,
            self.summary,
            self.tags.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_format() {
        let record = MetadataRecord::new(
            "Fox Facts".to_string(),
            "A fox is quick.".to_string(),
            vec!["quick brown".to_string(), "fox".to_string()],
        );
        assert_eq!(
            record.to_string(),
            "**Title**: Fox Facts\n**Summary**: A fox is quick.\n**Tags**: quick brown, fox"
        );
    }

    #[test]
    fn test_metadata_format_no_tags() {
        let record = MetadataRecord::new("T".to_string(), "S".to_string(), Vec::new());
        assert_eq!(record.to_string(), "**Title**: T\n**Summary**: S\n**Tags**: ");
    }
}
