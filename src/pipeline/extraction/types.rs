use super::ExtractionError;

/// Text extraction abstraction (allows mocking for tests).
///
/// Implementations may return an empty string when no text is extractable;
/// the runner halts before any model call in that case.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}
