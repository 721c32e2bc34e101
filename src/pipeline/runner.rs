//! End-to-end claim analysis: extract, segment, analyze, merge, decide.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::config::AnalysisConfig;
use crate::llm::LlmClient;
use crate::pipeline::analysis::{
    degraded_count, merge_findings, AnalysisError, Chunk, ChunkAnalyzer, Dispatcher,
};
use crate::pipeline::decision::{Decision, DecisionEngine, DecisionError};
use crate::pipeline::extraction::{ExtractionError, TextExtractor};
use crate::pipeline::segmenter::segment;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document produced no analyzable text.
    #[error("Document contained no extractable text")]
    ExtractionEmpty,

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Chunk analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Decision failed: {0}")]
    Decision(#[from] DecisionError),

    #[error("Pipeline worker failed: {0}")]
    Worker(String),
}

/// Outcome of one full analysis run, serializable for machine consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimReport {
    pub decision: Decision,
    pub chunk_count: usize,
    pub degraded_chunks: usize,
    pub merged_summary_chars: usize,
    pub duration_ms: u128,
}

/// Orchestrates the whole pipeline against one shared model client.
pub struct ClaimAnalyzer {
    dispatcher: Dispatcher,
    engine: Arc<DecisionEngine>,
    max_chunk_chars: usize,
}

impl ClaimAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>, config: &AnalysisConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(
                ChunkAnalyzer::new(Arc::clone(&llm)),
                config.max_concurrency,
            ),
            engine: Arc::new(DecisionEngine::new(llm)),
            max_chunk_chars: config.max_chunk_chars,
        }
    }

    /// Run the pipeline over already-extracted document text.
    pub async fn analyze(
        &self,
        document_text: &str,
        query: &str,
    ) -> Result<ClaimReport, PipelineError> {
        let started = Instant::now();

        let text = document_text.trim();
        if text.is_empty() {
            return Err(PipelineError::ExtractionEmpty);
        }

        let chunks = Chunk::from_segments(segment(text, self.max_chunk_chars));
        tracing::info!(
            chunks = chunks.len(),
            document_chars = text.len(),
            "Segmented document"
        );

        let findings = self.dispatcher.dispatch(query, chunks).await?;
        let chunk_count = findings.len();
        let degraded_chunks = degraded_count(&findings);
        if degraded_chunks > 0 {
            tracing::warn!(
                degraded = degraded_chunks,
                total = chunk_count,
                "Some chunks degraded by quota exhaustion"
            );
        }

        let merged = merge_findings(&findings);
        let merged_summary_chars = merged.len();

        let engine = Arc::clone(&self.engine);
        let query = query.to_string();
        let decision = tokio::task::spawn_blocking(move || engine.decide(&query, &merged))
            .await
            .map_err(|e| PipelineError::Worker(e.to_string()))??;

        let report = ClaimReport {
            decision,
            chunk_count,
            degraded_chunks,
            merged_summary_chars,
            duration_ms: started.elapsed().as_millis(),
        };
        tracing::info!(
            chunks = report.chunk_count,
            degraded = report.degraded_chunks,
            duration_ms = report.duration_ms,
            "Analysis complete"
        );
        Ok(report)
    }

    /// Extract text from raw document bytes, then run the pipeline.
    pub async fn analyze_document(
        &self,
        extractor: &dyn TextExtractor,
        bytes: &[u8],
        query: &str,
    ) -> Result<ClaimReport, PipelineError> {
        let text = extractor.extract_text(bytes)?;
        self.analyze(&text, query).await
    }
}
