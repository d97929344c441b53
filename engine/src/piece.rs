//! Piece interning.
//!
//! The aligners compare small integers instead of strings. A [`PieceIndex`]
//! is the per-comparison table that hands out those integers: it is created
//! for one alignment call, shared by every sequence compared in that call,
//! and dropped when the call returns. Ids are never meaningful across calls.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::options::DiffOptions;

/// Identifier of a distinct piece within one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

impl PieceId {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PieceId {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps piece text to [`PieceId`]s for the duration of one comparison.
///
/// Two pieces receive the same id exactly when their normalized text is
/// equal. Normalization is controlled by `ignore_case` and
/// `ignore_whitespace`; the original text is never modified.
#[derive(Debug, Clone, Default)]
pub struct PieceIndex {
    ids: HashMap<String, PieceId>,
    ignore_case: bool,
    ignore_whitespace: bool,
}

impl PieceIndex {
    /// Creates an empty index honoring the comparison flags in `options`.
    #[must_use]
    pub fn new(options: &DiffOptions) -> Self {
        Self {
            ids: HashMap::new(),
            ignore_case: options.ignore_case,
            ignore_whitespace: options.ignore_whitespace,
        }
    }

    /// Returns the id for `piece`, assigning a fresh one on first sight.
    pub fn intern(&mut self, piece: &str) -> PieceId {
        let key = self.normalize(piece);
        if let Some(&id) = self.ids.get(key.as_ref()) {
            return id;
        }
        let id = PieceId(self.ids.len());
        self.ids.insert(key.into_owned(), id);
        id
    }

    /// Interns every piece of `pieces`, preserving order.
    pub fn index_all(&mut self, pieces: &[String]) -> Vec<PieceId> {
        pieces.iter().map(|piece| self.intern(piece)).collect()
    }

    /// Returns the number of distinct pieces seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no piece has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn normalize<'a>(&self, piece: &'a str) -> Cow<'a, str> {
        let piece = if self.ignore_whitespace {
            piece.trim()
        } else {
            piece
        };
        if self.ignore_case {
            Cow::Owned(piece.to_lowercase())
        } else {
            Cow::Borrowed(piece)
        }
    }
}
