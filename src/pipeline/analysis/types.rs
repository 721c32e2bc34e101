/// A contiguous segment of the document, tagged with its position.
///
/// The index is carried as structured data end-to-end; ordering never
/// depends on re-parsing a text marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    /// Tag segmenter output with ascending positions.
    pub fn from_segments(segments: Vec<String>) -> Vec<Chunk> {
        segments
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk { index, text })
            .collect()
    }
}

/// The analyzed result of one chunk.
///
/// Produced out of order by concurrent completion; consumed in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub index: usize,
    pub text: String,
    /// True when quota exhaustion degraded this chunk to a placeholder
    /// finding instead of real analysis.
    pub degraded: bool,
}
