use super::types::TextExtractor;
use super::ExtractionError;

/// Plaintext passthrough for .txt inputs.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}
