use std::sync::Arc;

use super::parser::parse_decision;
use super::types::Decision;
use super::DecisionError;
use crate::llm::{DecodingOptions, LlmClient};
use crate::pipeline::prompt::build_decision_prompt;

/// Final decision stage: one model call over the merged findings.
///
/// Chunk analysis never decides anything; this is the only place a verdict
/// is requested from the model, and it runs exactly once per document.
pub struct DecisionEngine {
    llm: Arc<dyn LlmClient>,
}

impl DecisionEngine {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn decide(&self, query: &str, merged_summary: &str) -> Result<Decision, DecisionError> {
        let prompt = build_decision_prompt(query, merged_summary);
        tracing::debug!(
            summary_chars = merged_summary.len(),
            "Requesting final decision"
        );

        let response = self.llm.complete(&prompt, &DecodingOptions::deterministic())?;
        parse_decision(&response)
    }
}
