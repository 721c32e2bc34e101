use super::types::TextExtractor;
use super::ExtractionError;

/// Direct PDF text extraction via the pdf-extract crate.
///
/// Scanned or image-only PDFs yield little or no text; that surfaces as an
/// empty result upstream, not an error here.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_as_pdf_parsing() {
        let result = PdfTextExtractor.extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }
}
