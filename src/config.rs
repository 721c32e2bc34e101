use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "claimlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the model service API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "claimlens=info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {API_KEY_VAR} in environment")]
    MissingApiKey,
}

/// Explicit configuration for one analysis run.
///
/// Built once at startup and passed to the engines. No ambient global
/// API-key state, so tests can run with mock credentials and service stubs.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Model service API key (required).
    pub api_key: String,
    /// Model identifier sent to the service.
    pub model: String,
    /// Base URL of the model service.
    pub base_url: String,
    /// Soft character budget per chunk. A single word longer than this
    /// becomes its own oversized chunk rather than being split mid-word.
    pub max_chunk_chars: usize,
    /// Cap on concurrent per-chunk model calls.
    pub max_concurrency: usize,
    /// Per-request timeout for model calls.
    pub request_timeout: Duration,
}

impl AnalysisConfig {
    /// Config with defaults matching production use.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_chunk_chars: 20_000,
            max_concurrency: 4,
            request_timeout: Duration::from_secs(120),
        }
    }

    /// Read the required API key from the process environment.
    ///
    /// Absence is a fatal startup error; no model call is ever attempted
    /// without credentials.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }
}
