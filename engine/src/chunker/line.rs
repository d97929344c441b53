//! Line chunkers.
//!
//! Both chunkers recognise `\r\n`, `\r` and `\n` as terminators. They differ
//! only in whether the terminator stays attached to its line.

use super::Chunker;

/// Emits one piece per line, dropping terminators.
///
/// Text ending in a terminator yields an explicit empty final piece, so the
/// piece count equals the number of visual lines. Empty text yields a single
/// empty piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChunker;

impl LineChunker {
    /// Creates a line chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for LineChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for (line_end, next_start) in terminators(text) {
            pieces.push(text[start..line_end].to_string());
            start = next_start;
        }
        pieces.push(text[start..].to_string());
        pieces
    }
}

/// Emits one piece per line, each keeping its own terminator.
///
/// Concatenating the pieces reproduces the input exactly. A final
/// unterminated segment is returned as-is; empty text yields no pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEndingsPreservingChunker;

impl LineEndingsPreservingChunker {
    /// Creates a terminator-preserving line chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for LineEndingsPreservingChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for (_, next_start) in terminators(text) {
            pieces.push(text[start..next_start].to_string());
            start = next_start;
        }
        if start < text.len() {
            pieces.push(text[start..].to_string());
        }
        pieces
    }
}

/// Yields `(line_end, next_line_start)` byte offsets for every terminator.
fn terminators(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let at = pos;
            match bytes[at] {
                b'\n' => {
                    pos = at + 1;
                    return Some((at, pos));
                }
                b'\r' => {
                    pos = if bytes.get(at + 1) == Some(&b'\n') {
                        at + 2
                    } else {
                        at + 1
                    };
                    return Some((at, pos));
                }
                _ => pos += 1,
            }
        }
        None
    })
}
