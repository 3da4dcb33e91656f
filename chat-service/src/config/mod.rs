use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Default Gemini model for chat answers.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Default transport timeout for a single Gemini call.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub institution: InstitutionProfile,
    /// OTLP collector for span export; logs stay local when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub timeout: Duration,
}

/// Names the chatbot speaks for.
///
/// The lowercased short name doubles as the keyword that forces a model
/// answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionProfile {
    pub short_name: String,
    pub full_name: String,
}

impl Default for InstitutionProfile {
    fn default() -> Self {
        Self {
            short_name: "RCPIT".to_string(),
            full_name: "R.C. Patel Institute of Technology".to_string(),
        }
    }
}

impl InstitutionProfile {
    pub fn trigger_keyword(&self) -> String {
        self.short_name.to_lowercase()
    }

    pub fn refusal(&self) -> String {
        format!("I can only answer {}-related queries.", self.short_name)
    }
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = get_env("GEMINI_API_KEY", None, is_prod)?;
        if api_key.trim().is_empty() {
            return Err(AppError::config("GEMINI_API_KEY is set but empty"));
        }

        let timeout_secs = get_env(
            "GEMINI_TIMEOUT_SECS",
            Some(&DEFAULT_TIMEOUT_SECS.to_string()),
            is_prod,
        )?
        .parse()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(ChatConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: Secret::new(api_key),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                timeout: Duration::from_secs(timeout_secs),
            },
            institution: InstitutionProfile::default(),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }

    pub fn api_key(&self) -> &str {
        self.gemini.api_key.expose_secret()
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::config(format!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::config(format!("{} is required but not set", key)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_derives_trigger_and_refusal() {
        let profile = InstitutionProfile::default();
        assert_eq!(profile.trigger_keyword(), "rcpit");
        assert_eq!(profile.refusal(), "I can only answer RCPIT-related queries.");
    }

    #[test]
    fn missing_required_variable_is_config_error() {
        let err = get_env("CHAT_SERVICE_TEST_UNSET_VARIABLE", None, false).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn default_applies_outside_production() {
        let value = get_env("CHAT_SERVICE_TEST_UNSET_VARIABLE", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
        assert!(get_env("CHAT_SERVICE_TEST_UNSET_VARIABLE", Some("fallback"), true).is_err());
    }
}
