//! Config tests.

use crate::config::bot_config::BotConfig;
use crate::config::AppExtensions;
use embedding::EmbeddingConfig;
use llm_client::LlmConfig;
use serial_test::serial;
use std::env;

const KEYS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "MAX_CONCURRENT_MESSAGES",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "CHAT_MODEL",
    "SUMMARY_MODEL",
    "TITLE_MODEL",
    "EMBEDDING_MODEL",
    "REPLY_MAX_TOKENS",
    "SUMMARY_MAX_TOKENS",
    "SUMMARY_MIN_WORDS",
    "TITLE_MAX_TOKENS",
    "KEYWORD_TOP_N",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/bot.log");
    assert_eq!(config.max_concurrent_messages(), 4);
    let llm = config.extensions().llm_config();
    assert_eq!(llm.api_key(), "");
    assert_eq!(llm.chat_model(), "gpt-4o-mini");
    assert_eq!(llm.title_model(), "gpt-4o-mini");
    assert_eq!(
        config.extensions().embedding_config().model(),
        "text-embedding-3-small"
    );
    assert_eq!(config.extensions().adapter_config().keyword_top_n, 5);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("LOG_FILE", "/tmp/custom.log");
    env::set_var("MAX_CONCURRENT_MESSAGES", "16");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("SUMMARY_MODEL", "summarizer-large");
    env::set_var("TITLE_MAX_TOKENS", "12");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.log_file(), "/tmp/custom.log");
    assert_eq!(config.max_concurrent_messages(), 16);
    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    let llm = config.extensions().llm_config();
    assert_eq!(llm.summary_model(), "summarizer-large");
    assert_eq!(llm.title_model(), "summarizer-large");
    assert_eq!(config.extensions().adapter_config().title_max_tokens, 12);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();
    assert_eq!(config.bot_token(), "override_token");

    clear_env();
}

#[test]
#[serial]
fn test_missing_bot_token_is_error() {
    clear_env();
    assert!(BotConfig::load(None).is_err());

    env::set_var("BOT_TOKEN", "   ");
    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_zero_bounds() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("KEYWORD_TOP_N", "0");
    assert!(BotConfig::load(None).unwrap().validate().is_err());

    env::remove_var("KEYWORD_TOP_N");
    env::set_var("MAX_CONCURRENT_MESSAGES", "0");
    assert!(BotConfig::load(None).unwrap().validate().is_err());

    clear_env();
}
