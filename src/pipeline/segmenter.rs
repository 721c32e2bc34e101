//! Deterministic word-boundary segmentation under a soft character budget.
//!
//! Chunks partition the document's word sequence without overlap or loss;
//! joining all chunks' words in order reproduces the original word sequence
//! exactly (whitespace normalized to single spaces).

/// Split `text` into word-boundary chunks of at most `max_chars` characters.
///
/// Words are accumulated with single-space separators until the next word
/// would overflow the budget, then the buffer closes as a chunk. A single
/// word longer than `max_chars` becomes its own oversized chunk: the budget
/// is a soft target, and splitting mid-word would corrupt tokenization for
/// the downstream model.
///
/// Pure function of `(text, max_chars)`. Empty input yields no chunks.
pub fn segment(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
