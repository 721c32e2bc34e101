use std::sync::Arc;

use futures_util::{stream, StreamExt};

use super::analyzer::ChunkAnalyzer;
use super::types::{Chunk, Finding};
use super::AnalysisError;

/// Bounded concurrent fan-out of chunk analyses with an explicit join point.
///
/// Model calls block on network I/O, so each invocation runs on the blocking
/// thread pool; `buffer_unordered` caps how many are in flight and never
/// starts invocations that have not been polled yet. After the join, findings
/// are re-sorted by their own index field, since completion order is
/// non-deterministic and must not leak downstream.
pub struct Dispatcher {
    analyzer: Arc<ChunkAnalyzer>,
    max_concurrency: usize,
}

impl Dispatcher {
    pub fn new(analyzer: ChunkAnalyzer, max_concurrency: usize) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            max_concurrency,
        }
    }

    /// Analyze every chunk and return findings in original chunk order.
    ///
    /// The first non-quota failure aborts the batch: already-collected
    /// findings are discarded and not-yet-started invocations never run.
    /// Quota failures never reach this layer (the analyzer degrades them).
    pub async fn dispatch(
        &self,
        query: &str,
        chunks: Vec<Chunk>,
    ) -> Result<Vec<Finding>, AnalysisError> {
        let total = chunks.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let jobs = chunks.into_iter().map(|chunk| {
            let analyzer = Arc::clone(&self.analyzer);
            let query = query.to_string();
            async move {
                tokio::task::spawn_blocking(move || analyzer.analyze(&query, &chunk, total)).await
            }
        });

        let mut in_flight = stream::iter(jobs).buffer_unordered(self.max_concurrency.max(1));

        let mut findings = Vec::with_capacity(total);
        while let Some(joined) = in_flight.next().await {
            let finding = joined.map_err(|e| AnalysisError::Worker(e.to_string()))??;
            findings.push(finding);
        }
        drop(in_flight);

        findings.sort_by_key(|f| f.index);
        Ok(findings)
    }
}
