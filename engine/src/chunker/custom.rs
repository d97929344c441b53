//! Caller-supplied chunking.

use std::fmt;

use super::Chunker;

type ChunkFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// Delegates chunking to a caller-supplied function.
///
/// The engine imposes no constraint on the returned pieces beyond
/// determinism.
pub struct CustomChunker {
    split: Box<ChunkFn>,
}

impl CustomChunker {
    /// Wraps `split` as a chunker.
    pub fn new<F>(split: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            split: Box::new(split),
        }
    }
}

impl fmt::Debug for CustomChunker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomChunker").finish_non_exhaustive()
    }
}

impl Chunker for CustomChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        (self.split)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_function() {
        let chunker = CustomChunker::new(|text| {
            text.split('|').map(str::to_string).collect()
        });
        assert_eq!(chunker.chunk("a|b||c"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_debug_output() {
        let chunker = CustomChunker::new(|_| Vec::new());
        assert_eq!(format!("{chunker:?}"), "CustomChunker { .. }");
    }
}
