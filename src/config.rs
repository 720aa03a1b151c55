use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: Option<SecretString>,
    pub groq_api_base: String,
    pub groq_model: String,
    pub groq_chat_model: String,
    pub generator_timeout_secs: u64,
    pub generator_max_attempts: u32,
    pub generator_backoff_ms: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_idle_minutes: i64,
    pub chat_subject: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env::var("GROQ_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .map(SecretString::from),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            groq_chat_model: env::var("GROQ_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            generator_timeout_secs: env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            generator_max_attempts: env::var("GENERATOR_MAX_ATTEMPTS")
                .ok()
                .and_then(|a| a.parse().ok())
                .filter(|a| *a > 0)
                .unwrap_or(3),
            generator_backoff_ms: env::var("GENERATOR_BACKOFF_MS")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(1000),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m| *m > 0)
                .unwrap_or(60),
            chat_subject: env::var("CHAT_SUBJECT")
                .unwrap_or_else(|_| "Data Structures".to_string()),
        }
    }

    /// True when a non-empty generator credential is present.
    pub fn api_configured(&self) -> bool {
        self.groq_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    pub fn generator_timeout(&self) -> Duration {
        Duration::from_secs(self.generator_timeout_secs)
    }

    pub fn generator_backoff(&self) -> Duration {
        Duration::from_millis(self.generator_backoff_ms)
    }

    /// Report configuration problems at startup.
    /// A missing credential is not fatal: every generator-backed path has a local fallback.
    pub fn validate_for_production(&self) {
        if !self.api_configured() {
            log::warn!(
                "GROQ_API_KEY is not set; questions and roadmaps will be served from the built-in fallbacks"
            );
        }

        if self.generator_timeout_secs == 0 {
            log::warn!("GENERATOR_TIMEOUT_SECS is 0; every generator call will time out immediately");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            groq_api_key: None,
            groq_api_base: DEFAULT_API_BASE.to_string(),
            groq_model: DEFAULT_MODEL.to_string(),
            groq_chat_model: DEFAULT_CHAT_MODEL.to_string(),
            generator_timeout_secs: 1,
            generator_max_attempts: 3,
            generator_backoff_ms: 0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            session_idle_minutes: 60,
            chat_subject: "Data Structures".to_string(),
        }
    }
}
