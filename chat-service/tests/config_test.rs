//! Configuration loading from the process environment.
//!
//! Kept in one test so the environment changes do not race.

use chat_service::config::ChatConfig;
use service_core::error::AppError;
use std::time::Duration;

#[test]
fn api_key_is_required_and_defaults_fill_the_rest() {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::remove_var("GEMINI_API_KEY");
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("GEMINI_TIMEOUT_SECS");

    let err = ChatConfig::load().expect_err("missing key must fail");
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    std::env::set_var("GEMINI_API_KEY", "   ");
    assert!(ChatConfig::load().is_err());

    std::env::set_var("GEMINI_API_KEY", "test-api-key");
    let config = ChatConfig::load().expect("config loads with key set");
    assert_eq!(config.api_key(), "test-api-key");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    assert_eq!(config.institution.short_name, "RCPIT");

    std::env::set_var("GEMINI_MODEL", "gemini-1.5-pro");
    std::env::set_var("GEMINI_TIMEOUT_SECS", "9");
    let config = ChatConfig::load().expect("config loads with overrides");
    assert_eq!(config.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.gemini.timeout, Duration::from_secs(9));
}
