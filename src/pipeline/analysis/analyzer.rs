use std::sync::Arc;

use super::types::{Chunk, Finding};
use super::AnalysisError;
use crate::llm::{DecodingOptions, LlmClient};
use crate::pipeline::prompt::{build_chunk_prompt, findings_header};

/// Per-chunk worker: one model call, findings only, no verdict.
///
/// Quota exhaustion is absorbed locally into a degraded textual finding so
/// one rate-limited chunk does not abort the batch. Every other model
/// failure propagates to the dispatcher as fatal.
pub struct ChunkAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl ChunkAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn analyze(
        &self,
        query: &str,
        chunk: &Chunk,
        total: usize,
    ) -> Result<Finding, AnalysisError> {
        let prompt = build_chunk_prompt(query, &chunk.text, chunk.index, total);

        match self.llm.complete(&prompt, &DecodingOptions::deterministic()) {
            Ok(text) => Ok(Finding {
                index: chunk.index,
                text: format!("{}\n{}", findings_header(chunk.index), text.trim()),
                degraded: false,
            }),
            Err(e) if e.is_quota() => {
                tracing::warn!(
                    chunk = chunk.index,
                    "Model quota exhausted, continuing with degraded finding"
                );
                Ok(Finding {
                    index: chunk.index,
                    text: format!(
                        "{}\n[Model quota exhausted while analyzing part {} of {}. \
                         Findings unavailable for this part.]",
                        findings_header(chunk.index),
                        chunk.index + 1,
                        total
                    ),
                    degraded: true,
                })
            }
            Err(e) => Err(AnalysisError::Chunk {
                index: chunk.index,
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmError, MockLlmClient};

    struct QuotaLlm;

    impl LlmClient for QuotaLlm {
        fn complete(&self, _: &str, _: &DecodingOptions) -> Result<String, LlmError> {
            Err(LlmError::QuotaExhausted)
        }
    }

    struct FatalLlm;

    impl LlmClient for FatalLlm {
        fn complete(&self, _: &str, _: &DecodingOptions) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                body: "internal".into(),
            })
        }
    }

    fn chunk(index: usize) -> Chunk {
        Chunk {
            index,
            text: format!("policy text {index}"),
        }
    }

    #[test]
    fn finding_is_prefixed_with_part_marker() {
        let analyzer = ChunkAnalyzer::new(Arc::new(MockLlmClient::new("- exclusion noted")));
        let finding = analyzer.analyze("claim", &chunk(1), 3).unwrap();

        assert_eq!(finding.index, 1);
        assert!(finding.text.starts_with("Findings from Part 2:"));
        assert!(finding.text.contains("- exclusion noted"));
        assert!(!finding.degraded);
    }

    #[test]
    fn quota_exhaustion_becomes_degraded_finding() {
        let analyzer = ChunkAnalyzer::new(Arc::new(QuotaLlm));
        let finding = analyzer.analyze("claim", &chunk(0), 2).unwrap();

        assert!(finding.degraded);
        assert!(finding.text.starts_with("Findings from Part 1:"));
        assert!(finding.text.contains("quota exhausted"));
    }

    #[test]
    fn non_quota_failure_propagates() {
        let analyzer = ChunkAnalyzer::new(Arc::new(FatalLlm));
        let result = analyzer.analyze("claim", &chunk(2), 3);

        match result {
            Err(AnalysisError::Chunk { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(source, LlmError::Api { status: 500, .. }));
            }
            other => panic!("Expected fatal chunk error, got {other:?}"),
        }
    }
}
