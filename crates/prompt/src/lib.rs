//! # Prompt
//!
//! Chat message types and the instruction prompts for the three completion-backed capabilities:
//!
//! - **Reply**: open-ended conversational answer to the user's text.
//! - **Summary**: a faithful summary with a lower length bound.
//! - **Title**: a single short phrase.
//!
//! Each `*_messages` builder returns the full message list (system + user) for one request.
//! The user's text is passed through verbatim, including when it is empty.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// System instruction for conversational replies.
pub const REPLY_SYSTEM: &str = "You are a friendly conversational assistant in a Telegram chat. \
Reply to the user's message naturally and helpfully. Answer in plain text without Markdown.";

/// System instruction for summaries. `{min_words}` is replaced with the lower bound.
pub const SUMMARY_SYSTEM_TEMPLATE: &str = "You summarize text. Write a concise, faithful summary \
of the user's text in plain prose, at least {min_words} words long. Do not add facts that are \
not in the text. Return only the summary.";

/// System instruction for titles.
pub const TITLE_SYSTEM: &str = "You write titles. Produce one short title phrase (at most a few \
words) that captures the main topic of the user's text. No quotation marks, no trailing \
punctuation, no explanation. Return only the title.";

/// Messages for a conversational reply to `text`.
pub fn reply_messages(text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(REPLY_SYSTEM), ChatMessage::user(text)]
}

/// Messages for a summary of `text` of at least `min_words` words.
pub fn summary_messages(text: &str, min_words: u32) -> Vec<ChatMessage> {
    let system = SUMMARY_SYSTEM_TEMPLATE.replace("{min_words}", &min_words.to_string());
    vec![ChatMessage::system(system), ChatMessage::user(text)]
}

/// Messages for a short title of `text`.
pub fn title_messages(text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(TITLE_SYSTEM), ChatMessage::user(text)]
}
