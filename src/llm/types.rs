use serde::Serialize;

use super::LlmError;

/// Decoding parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodingOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl DecodingOptions {
    /// Greedy decoding for reproducibility across repeated runs on
    /// identical input.
    pub fn deterministic() -> Self {
        Self {
            temperature: 0.0,
            top_p: 1.0,
            top_k: 1,
        }
    }
}

impl Default for DecodingOptions {
    fn default() -> Self {
        Self::deterministic()
    }
}

/// Model service abstraction (allows mocking for tests).
///
/// Implementations block on network I/O; callers running under tokio
/// drive them through `spawn_blocking`.
pub trait LlmClient: Send + Sync {
    fn complete(&self, prompt: &str, options: &DecodingOptions) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_options_are_greedy() {
        let options = DecodingOptions::deterministic();
        assert_eq!(options.temperature, 0.0);
        assert_eq!(options.top_p, 1.0);
        assert_eq!(options.top_k, 1);
    }

    #[test]
    fn default_matches_deterministic() {
        assert_eq!(DecodingOptions::default(), DecodingOptions::deterministic());
    }
}
