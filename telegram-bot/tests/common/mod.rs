//! Shared test doubles: recording Bot, fake model adapters, message builders.

#![allow(dead_code)]

pub mod fake_models;
pub mod mock_bot;

use chrono::Utc;
use telegram_bot::{Chat, Message, User};

/// Private-chat text message from "Ada".
pub fn text_message(chat_id: i64, message_id: i32, text: &str) -> Message {
    Message {
        id: message_id.to_string(),
        user: User {
            id: chat_id,
            username: Some("ada_l".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "Private".to_string(),
        },
        content: text.to_string(),
        created_at: Utc::now(),
    }
}
