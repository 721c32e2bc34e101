pub mod types;
pub mod gemini;

pub use types::*;
pub use gemini::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model service quota exhausted")]
    QuotaExhausted,

    #[error("Cannot reach model service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Model service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Model returned an empty response")]
    EmptyResponse,
}

impl LlmError {
    /// Transient rate-limit condition, recoverable by degradation.
    pub fn is_quota(&self) -> bool {
        matches!(self, LlmError::QuotaExhausted)
    }
}
