//! Tokenization policies.
//!
//! A [`Chunker`] turns raw text into the ordered sequence of pieces that the
//! aligners compare. The built-in policies are stateless and can be shared
//! freely between threads; [`ChunkPolicy`] selects one of them from
//! configuration, and [`CustomChunker`] wraps a caller-supplied function.
//!
//! # Example
//!
//! ```
//! use chunkdiff::chunker::{Chunker, LineEndingsPreservingChunker};
//!
//! let pieces = LineEndingsPreservingChunker::new().chunk("a\r\nb\nc");
//! assert_eq!(pieces, vec!["a\r\n", "b\n", "c"]);
//! assert_eq!(pieces.concat(), "a\r\nb\nc");
//! ```

pub mod character;
pub mod custom;
pub mod delimiter;
pub mod line;

pub use character::CharacterChunker;
pub use custom::CustomChunker;
pub use delimiter::{DelimiterChunker, WORD_DELIMITERS, WordChunker};
pub use line::{LineChunker, LineEndingsPreservingChunker};

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// Splits text into an ordered sequence of pieces.
///
/// Implementations must be deterministic: the same text always yields the
/// same pieces. The `Send + Sync` bound lets one chunker serve concurrent
/// comparisons.
pub trait Chunker: Send + Sync {
    /// Splits `text` into pieces.
    fn chunk(&self, text: &str) -> Vec<String>;
}

impl<C: Chunker + ?Sized> Chunker for Box<C> {
    fn chunk(&self, text: &str) -> Vec<String> {
        (**self).chunk(text)
    }
}

impl<C: Chunker + ?Sized> Chunker for std::sync::Arc<C> {
    fn chunk(&self, text: &str) -> Vec<String> {
        (**self).chunk(text)
    }
}

/// Built-in chunking policy, selectable from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChunkPolicy {
    /// One piece per character.
    Character,
    /// One piece per line, terminators dropped.
    #[default]
    Line,
    /// One piece per line, each keeping its own terminator.
    LinePreserving,
    /// Words and the separator runs between them.
    Word,
    /// Runs split on a caller-chosen delimiter set.
    Delimiter {
        /// Every character of this string is a delimiter.
        delimiters: String,
    },
}

impl ChunkPolicy {
    /// Instantiates the chunker this policy names.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfiguration`] for a delimiter policy with
    /// an empty delimiter set.
    pub fn build(&self) -> Result<Box<dyn Chunker>, DiffError> {
        Ok(match self {
            Self::Character => Box::new(CharacterChunker::new()),
            Self::Line => Box::new(LineChunker::new()),
            Self::LinePreserving => Box::new(LineEndingsPreservingChunker::new()),
            Self::Word => Box::new(WordChunker::new()),
            Self::Delimiter { delimiters } => {
                Box::new(DelimiterChunker::new(delimiters.chars())?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_builds_matching_chunker() {
        let chunker = ChunkPolicy::LinePreserving.build().unwrap();
        assert_eq!(chunker.chunk("x\ny"), vec!["x\n", "y"]);

        let chunker = ChunkPolicy::Character.build().unwrap();
        assert_eq!(chunker.chunk("ab"), vec!["a", "b"]);
    }

    #[test]
    fn test_delimiter_policy_rejects_empty_set() {
        let policy = ChunkPolicy::Delimiter {
            delimiters: String::new(),
        };
        assert!(matches!(
            policy.build(),
            Err(DiffError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_policy_deserializes_from_tagged_json() {
        let policy: ChunkPolicy =
            serde_json::from_str(r#"{"kind":"delimiter","delimiters":",;"}"#).unwrap();
        assert_eq!(
            policy,
            ChunkPolicy::Delimiter {
                delimiters: ",;".to_string()
            }
        );

        let policy: ChunkPolicy = serde_json::from_str(r#"{"kind":"line-preserving"}"#).unwrap();
        assert_eq!(policy, ChunkPolicy::LinePreserving);
    }

    #[test]
    fn test_boxed_chunker_delegates() {
        let boxed: Box<dyn Chunker> = Box::new(WordChunker::new());
        assert_eq!(boxed.chunk("a b"), vec!["a", " ", "b"]);
    }
}
