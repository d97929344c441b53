//! Delimiter-based chunkers.

use std::collections::BTreeSet;

use super::Chunker;
use crate::error::DiffError;

/// Whitespace and punctuation used by [`WordChunker`].
pub const WORD_DELIMITERS: &[char] = &[
    ' ', '\t', '\r', '\n', '.', ',', ';', ':', '!', '?', '(', ')', '{', '}', '[', ']',
];

/// Splits text into alternating runs of delimiter and non-delimiter
/// characters.
///
/// Consecutive delimiters are coalesced into one piece, and a delimiter run is
/// never merged with the content next to it, so concatenating the pieces
/// reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterChunker {
    delimiters: BTreeSet<char>,
}

impl DelimiterChunker {
    /// Creates a chunker splitting on every character in `delimiters`.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfiguration`] if `delimiters` is empty.
    pub fn new(delimiters: impl IntoIterator<Item = char>) -> Result<Self, DiffError> {
        let delimiters: BTreeSet<char> = delimiters.into_iter().collect();
        if delimiters.is_empty() {
            return Err(DiffError::InvalidConfiguration(
                "delimiter chunker requires at least one delimiter".to_string(),
            ));
        }
        Ok(Self { delimiters })
    }

    /// Returns the delimiter set.
    #[must_use]
    pub const fn delimiters(&self) -> &BTreeSet<char> {
        &self.delimiters
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}

impl Chunker for DelimiterChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut in_delimiters = None;

        for (idx, c) in text.char_indices() {
            let is_delim = self.is_delimiter(c);
            match in_delimiters {
                Some(current) if current != is_delim => {
                    pieces.push(text[start..idx].to_string());
                    start = idx;
                }
                _ => {}
            }
            in_delimiters = Some(is_delim);
        }

        if start < text.len() {
            pieces.push(text[start..].to_string());
        }
        pieces
    }
}

/// Splits text into words and the whitespace/punctuation runs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChunker {
    inner: DelimiterChunker,
}

impl WordChunker {
    /// Creates a word chunker over [`WORD_DELIMITERS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DelimiterChunker {
                delimiters: WORD_DELIMITERS.iter().copied().collect(),
            },
        }
    }
}

impl Default for WordChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for WordChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        self.inner.chunk(text)
    }
}
