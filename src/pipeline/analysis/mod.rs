pub mod types;
pub mod analyzer;
pub mod dispatcher;
pub mod aggregator;

pub use types::*;
pub use analyzer::*;
pub use dispatcher::*;
pub use aggregator::*;

use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Non-quota model failure on one chunk, fatal for the whole batch.
    #[error("Analysis of chunk {index} failed: {source}")]
    Chunk {
        index: usize,
        #[source]
        source: LlmError,
    },

    #[error("Analysis worker failed: {0}")]
    Worker(String),
}
