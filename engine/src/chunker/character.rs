//! Character chunker.

use super::Chunker;

/// Emits one piece per Unicode scalar value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterChunker;

impl CharacterChunker {
    /// Creates a character chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for CharacterChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
}
