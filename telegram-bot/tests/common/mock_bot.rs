//! Mock implementation of [`telegram_bot::Bot`] for integration tests.
//!
//! Every outbound text is sent as a [`SentRecord`] on an unbounded channel; the test holds the
//! receiver and asserts on order and content without hitting Telegram.

use async_trait::async_trait;
use std::sync::Arc;
use telegram_bot::{Bot, DbotError, Message, Result};
use tokio::sync::mpsc;

/// One outbound message and the id of the message it quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply_to: String,
    pub text: String,
}

/// Records sends. When `fail_on` is set, a send whose text starts with it fails (and is not recorded).
pub struct MockBot {
    tx: mpsc::UnboundedSender<SentRecord>,
    fail_on: Option<String>,
}

impl MockBot {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx, fail_on: None }), rx)
    }

    pub fn failing_on(prefix: &str) -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bot = Self {
            tx,
            fail_on: Some(prefix.to_string()),
        };
        (Arc::new(bot), rx)
    }

    fn record(&self, message: &Message, text: &str) -> Result<()> {
        if let Some(prefix) = &self.fail_on {
            if text.starts_with(prefix.as_str()) {
                return Err(DbotError::Bot("network unreachable".to_string()));
            }
        }
        let _ = self.tx.send(SentRecord {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(message, text)
    }
}

/// Drains everything sent so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<SentRecord>) -> Vec<SentRecord> {
    let mut out = Vec::new();
    while let Ok(record) = rx.try_recv() {
        out.push(record);
    }
    out
}

/// Texts only, in send order.
pub fn texts(records: &[SentRecord]) -> Vec<String> {
    records.iter().map(|r| r.text.clone()).collect()
}
