pub mod types;
pub mod parser;
pub mod engine;

pub use types::*;
pub use parser::*;
pub use engine::*;

use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum DecisionError {
    /// The model response contained no JSON object at all.
    #[error("Model response contained no structured output")]
    NoStructuredOutput { raw: String },

    /// A JSON object was found but did not deserialize into a decision.
    #[error("Model returned malformed structured output: {reason}")]
    MalformedStructuredOutput { reason: String, raw: String },

    #[error("Decision model call failed: {0}")]
    Service(#[from] LlmError),
}

impl DecisionError {
    /// The raw model response, when one was received. Surfaced to the user
    /// so a refused or malformed verdict is still inspectable.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            DecisionError::NoStructuredOutput { raw }
            | DecisionError::MalformedStructuredOutput { raw, .. } => Some(raw),
            DecisionError::Service(_) => None,
        }
    }
}
