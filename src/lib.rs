//! Claim analysis against long policy documents.
//!
//! The pipeline extracts text, segments it under a character budget, fans
//! out one model call per chunk (bounded concurrency, quota failures
//! isolated), merges findings in document order, and requests one
//! structured final decision.
//!
//! The presentation layer, PDF parsing internals, and the model service
//! itself sit behind traits (`TextExtractor`, `LlmClient`) so the
//! orchestration core stays fully testable with mock implementations.

pub mod config;
pub mod llm;
pub mod pipeline;
