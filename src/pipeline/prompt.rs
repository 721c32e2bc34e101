//! Prompt templates for the two model stages.
//!
//! Per-chunk prompts ask for findings only and explicitly defer the final
//! verdict: a chunk-level call sees partial context and must not commit to
//! a premature global decision. The decision prompt runs once over the
//! merged findings and demands a bare JSON object.

/// Stable marker prefixed to every finding; the 1-based part number follows.
pub const FINDINGS_MARKER: &str = "Findings from Part";

/// Header line identifying a chunk's 1-based position in the document.
pub fn findings_header(index: usize) -> String {
    format!("{FINDINGS_MARKER} {}:", index + 1)
}

/// Prompt for analyzing one chunk against the user's claim query.
pub fn build_chunk_prompt(query: &str, chunk_text: &str, index: usize, total: usize) -> String {
    format!(
        "You are an AI insurance analyst reviewing one part of a longer policy document.\n\
         \n\
         User Query:\n\
         {query}\n\
         \n\
         Policy Document (Part {part} of {total}):\n\
         {chunk_text}\n\
         \n\
         Your task:\n\
         1. List every clause, coverage term, exclusion, or waiting period in THIS part \
         that is relevant to the query.\n\
         2. Do NOT decide whether the claim should be approved or rejected. You are \
         seeing only one part of the document; the final decision is made later with \
         all parts combined.\n\
         \n\
         Reply with concise findings only.",
        part = index + 1,
    )
}

/// Prompt for the single final decision over the merged findings.
pub fn build_decision_prompt(query: &str, merged_summary: &str) -> String {
    format!(
        "You are an AI insurance analyst.\n\
         \n\
         User Query:\n\
         {query}\n\
         \n\
         Combined findings from the full policy document:\n\
         {merged_summary}\n\
         \n\
         Your task:\n\
         1. Determine if the claim should be approved or rejected.\n\
         2. Specify the claim amount (if applicable).\n\
         3. Justify the decision.\n\
         \n\
         Return ONLY a JSON response in the following format (no markdown, no explanation):\n\
         \n\
         {{\n\
           \"decision\": \"approved or rejected\",\n\
           \"amount\": \"amount in INR or null\",\n\
           \"justification\": \"your reasoning\"\n\
         }}"
    )
}
