//! The per-message audit entry stays on one log line (own test binary: the subscriber is global).

mod common;

use common::fake_models::{adapters, FakeModels};
use common::mock_bot::{drain, MockBot};
use common::text_message;
use std::sync::Arc;
use telegram_bot::{build_handler_chain, init_tracing, BotComponents};
use tokio::sync::RwLock;

#[tokio::test]
async fn test_multiline_text_is_logged_on_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.log");
    init_tracing(path.to_str().unwrap()).unwrap();

    let (bot, mut rx) = MockBot::with_receiver();
    let components = BotComponents {
        teloxide_bot: teloxide::Bot::new("123456:TEST"),
        bot_username: Arc::new(RwLock::new(None)),
        handler_bot: bot,
        models: adapters(FakeModels::new()),
    };
    let chain = build_handler_chain(&components);

    chain
        .handle(&text_message(5, 1, "shopping list\nmilk and eggs"))
        .await
        .unwrap();
    assert_eq!(drain(&mut rx).len(), 4);

    let contents = std::fs::read_to_string(&path).unwrap();
    let audit: Vec<&str> = contents
        .lines()
        .filter(|l| l.contains("Received message"))
        .collect();
    assert_eq!(audit.len(), 1);
    assert!(audit[0].contains(r#"text="shopping list\nmilk and eggs""#));
    assert!(audit[0].contains("sender=Ada"));
    assert!(!contents.lines().any(|l| l.starts_with("milk and eggs")));
}
