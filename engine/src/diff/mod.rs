//! Pairwise alignment.
//!
//! This module provides a trait-based approach to diff algorithms, allowing
//! the alignment strategy to be swapped while every caller sees the same
//! normalized [`EditBlock`] list.
//!
//! # Example
//!
//! ```
//! use chunkdiff::chunker::LineChunker;
//! use chunkdiff::{DiffOptions, EditBlock, diff};
//!
//! let result = diff("a\nb\nc", "a\nx\nc", &LineChunker::new(), &DiffOptions::default()).unwrap();
//! assert_eq!(result.blocks(), &[EditBlock::new(1, 1, 1, 1)]);
//! ```

pub mod longest_run;
pub mod myers;
pub(crate) mod optimization;

pub use longest_run::LongestRunDiff;
pub use myers::MyersDiff;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::chunker::Chunker;
use crate::error::{DiffError, InputSide};
use crate::options::{Algorithm, DiffOptions};
use crate::piece::{PieceId, PieceIndex};

/// A contiguous run of deletions and/or insertions between two sequences.
///
/// Starting at `delete_start` in the left sequence, `delete_count` pieces are
/// absent from the right; starting at `insert_start` in the right sequence,
/// `insert_count` pieces are absent from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditBlock {
    /// First deleted index in the left sequence.
    pub delete_start: usize,
    /// Number of deleted pieces.
    pub delete_count: usize,
    /// First inserted index in the right sequence.
    pub insert_start: usize,
    /// Number of inserted pieces.
    pub insert_count: usize,
}

impl EditBlock {
    /// Creates a block without validating it.
    #[must_use]
    pub const fn new(
        delete_start: usize,
        delete_count: usize,
        insert_start: usize,
        insert_count: usize,
    ) -> Self {
        Self {
            delete_start,
            delete_count,
            insert_start,
            insert_count,
        }
    }

    /// Creates a block, rejecting one that neither deletes nor inserts.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidArgument`] if both counts are zero.
    pub fn try_new(
        delete_start: usize,
        delete_count: usize,
        insert_start: usize,
        insert_count: usize,
    ) -> Result<Self, DiffError> {
        if delete_count == 0 && insert_count == 0 {
            return Err(DiffError::InvalidArgument(format!(
                "edit block at ({delete_start}, {insert_start}) neither deletes nor inserts"
            )));
        }
        Ok(Self::new(delete_start, delete_count, insert_start, insert_count))
    }

    /// Returns the end of the deleted span (exclusive).
    #[must_use]
    pub const fn delete_end(&self) -> usize {
        self.delete_start + self.delete_count
    }

    /// Returns the end of the inserted span (exclusive).
    #[must_use]
    pub const fn insert_end(&self) -> usize {
        self.insert_start + self.insert_count
    }

    /// Returns true if this block only inserts.
    #[must_use]
    pub const fn is_insertion(&self) -> bool {
        self.delete_count == 0 && self.insert_count > 0
    }

    /// Returns true if this block only deletes.
    #[must_use]
    pub const fn is_deletion(&self) -> bool {
        self.insert_count == 0 && self.delete_count > 0
    }

    /// Returns true if this block both deletes and inserts.
    #[must_use]
    pub const fn is_replacement(&self) -> bool {
        self.delete_count > 0 && self.insert_count > 0
    }
}

/// Trait for pairwise alignment algorithms.
///
/// Implementations return blocks in ascending, non-overlapping order over both
/// sequences, with no two blocks separated by an empty unchanged gap. Equal
/// inputs produce no blocks. The `Send + Sync` bound allows one instance to
/// serve concurrent callers.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit blocks turning `old` into `new`.
    fn diff(&self, old: &[PieceId], new: &[PieceId]) -> Vec<EditBlock>;
}

/// The outcome of a pairwise diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pieces_old: Vec<String>,
    pieces_new: Vec<String>,
    blocks: Vec<EditBlock>,
}

impl DiffResult {
    /// Assembles a result from caller-provided parts.
    ///
    /// The blocks are checked structurally: every block must change
    /// something, lie within both sequences, follow the previous block, and
    /// leave unchanged gaps of equal length on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidArgument`] describing the first violation.
    pub fn from_parts(
        pieces_old: Vec<String>,
        pieces_new: Vec<String>,
        blocks: Vec<EditBlock>,
    ) -> Result<Self, DiffError> {
        let (mut old_pos, mut new_pos) = (0, 0);
        for (idx, block) in blocks.iter().enumerate() {
            EditBlock::try_new(
                block.delete_start,
                block.delete_count,
                block.insert_start,
                block.insert_count,
            )?;
            if block.delete_start < old_pos || block.insert_start < new_pos {
                return Err(DiffError::InvalidArgument(format!(
                    "edit block {idx} overlaps or precedes the previous block"
                )));
            }
            if block.delete_start - old_pos != block.insert_start - new_pos {
                return Err(DiffError::InvalidArgument(format!(
                    "unchanged gap before edit block {idx} differs in length between sequences"
                )));
            }
            if idx > 0 && block.delete_start == old_pos {
                return Err(DiffError::InvalidArgument(format!(
                    "edit block {idx} is adjacent to the previous block"
                )));
            }
            let ends = block
                .delete_start
                .checked_add(block.delete_count)
                .zip(block.insert_start.checked_add(block.insert_count));
            match ends {
                Some((old_end, new_end))
                    if old_end <= pieces_old.len() && new_end <= pieces_new.len() =>
                {
                    old_pos = old_end;
                    new_pos = new_end;
                }
                _ => {
                    return Err(DiffError::InvalidArgument(format!(
                        "edit block {idx} extends past the end of its sequence"
                    )));
                }
            }
        }
        if pieces_old.len() - old_pos != pieces_new.len() - new_pos {
            return Err(DiffError::InvalidArgument(
                "trailing unchanged gap differs in length between sequences".to_string(),
            ));
        }
        Ok(Self {
            pieces_old,
            pieces_new,
            blocks,
        })
    }

    /// Returns the left sequence.
    #[must_use]
    pub fn pieces_old(&self) -> &[String] {
        &self.pieces_old
    }

    /// Returns the right sequence.
    #[must_use]
    pub fn pieces_new(&self) -> &[String] {
        &self.pieces_new
    }

    /// Returns the edit blocks in ascending order.
    #[must_use]
    pub fn blocks(&self) -> &[EditBlock] {
        &self.blocks
    }

    /// Returns true if the sequences compared equal.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the number of inserted pieces.
    #[must_use]
    pub fn inserted_count(&self) -> usize {
        self.blocks.iter().map(|b| b.insert_count).sum()
    }

    /// Returns the number of deleted pieces.
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.blocks.iter().map(|b| b.delete_count).sum()
    }

    /// Returns the number of pieces aligned 1:1 between both sequences.
    #[must_use]
    pub fn unchanged_count(&self) -> usize {
        self.pieces_old.len() - self.deleted_count()
    }

    /// Replays the blocks against the left sequence.
    ///
    /// Unchanged gaps are copied from the left sequence and inserted spans
    /// are spliced in from the right. Without `ignore_case` or
    /// `ignore_whitespace` the output equals the right sequence.
    #[must_use]
    pub fn replay(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.pieces_new.len());
        let mut pos = 0;
        for block in &self.blocks {
            out.extend(self.pieces_old[pos..block.delete_start].iter().map(String::as_str));
            out.extend(
                self.pieces_new[block.insert_start..block.insert_end()]
                    .iter()
                    .map(String::as_str),
            );
            pos = block.delete_end();
        }
        out.extend(self.pieces_old[pos..].iter().map(String::as_str));
        out
    }
}

/// Chunks two texts and diffs the resulting sequences.
///
/// # Errors
///
/// Returns an error if `options` is invalid or either text exceeds
/// `max_input_bytes`.
#[instrument(skip_all, fields(old_bytes = old.len(), new_bytes = new.len()))]
pub fn diff<C: Chunker + ?Sized>(
    old: &str,
    new: &str,
    chunker: &C,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    options.validate()?;
    options.check_text(InputSide::Old, old)?;
    options.check_text(InputSide::New, new)?;
    Ok(diff_unchecked(chunker.chunk(old), chunker.chunk(new), options))
}

/// Diffs two already-chunked sequences.
///
/// # Errors
///
/// Returns an error if `options` is invalid or either sequence exceeds
/// `max_input_bytes`.
#[instrument(skip_all, fields(old_len = old.len(), new_len = new.len()))]
pub fn diff_pieces(
    old: Vec<String>,
    new: Vec<String>,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    options.validate()?;
    options.check_pieces(InputSide::Old, &old)?;
    options.check_pieces(InputSide::New, &new)?;
    Ok(diff_unchecked(old, new, options))
}

fn diff_unchecked(old: Vec<String>, new: Vec<String>, options: &DiffOptions) -> DiffResult {
    let mut index = PieceIndex::new(options);
    let old_ids = index.index_all(&old);
    let new_ids = index.index_all(&new);
    let blocks = align(options.algorithm, &old_ids, &new_ids);
    debug!(
        distinct = index.len(),
        blocks = blocks.len(),
        "pairwise diff computed"
    );
    DiffResult {
        pieces_old: old,
        pieces_new: new,
        blocks,
    }
}

/// Runs `algorithm` over two id sequences.
pub(crate) fn align(algorithm: Algorithm, old: &[PieceId], new: &[PieceId]) -> Vec<EditBlock> {
    algorithm.implementation().diff(old, new)
}

/// Returns the length of the common prefix of `a` and `b`.
pub(crate) fn common_prefix_len(a: &[PieceId], b: &[PieceId]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Returns the length of the common suffix of `a` and `b`.
pub(crate) fn common_suffix_len(a: &[PieceId], b: &[PieceId]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
