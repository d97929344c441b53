//! Merge synthesis.
//!
//! Walks the classified regions of a [`ThreeWayDiffResult`] and builds the
//! merged piece sequence. Conflicting regions are left out of the merged
//! output and recorded as [`ConflictBlock`]s instead; rendering markers for
//! them is up to the caller.

use tracing::{debug, instrument};

use crate::chunker::Chunker;
use crate::error::DiffError;
use crate::options::DiffOptions;
use crate::three_way::{ChangeType, ThreeWayBlock, ThreeWayDiffResult, three_way_diff};

/// An unresolved region of a merge.
///
/// A view into the [`ThreeWayDiffResult`] held by the merge result; the
/// pieces are borrowed from its sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictBlock<'a> {
    block_index: usize,
    block: &'a ThreeWayBlock,
    base_pieces: &'a [String],
    old_pieces: &'a [String],
    new_pieces: &'a [String],
}

impl<'a> ConflictBlock<'a> {
    /// Returns the index of the originating block in the diff result.
    #[must_use]
    pub const fn block_index(&self) -> usize {
        self.block_index
    }

    /// Returns the originating three-way block.
    #[must_use]
    pub const fn block(&self) -> &'a ThreeWayBlock {
        self.block
    }

    /// Returns the base pieces of the region.
    #[must_use]
    pub const fn base_pieces(&self) -> &'a [String] {
        self.base_pieces
    }

    /// Returns the old pieces of the region.
    #[must_use]
    pub const fn old_pieces(&self) -> &'a [String] {
        self.old_pieces
    }

    /// Returns the new pieces of the region.
    #[must_use]
    pub const fn new_pieces(&self) -> &'a [String] {
        self.new_pieces
    }
}

/// The outcome of a merge.
///
/// A merge with conflicts is still a successful call; check
/// [`ThreeWayMergeResult::is_successful`] to find out whether every region
/// was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeWayMergeResult {
    merged_pieces: Vec<String>,
    conflict_indices: Vec<usize>,
    diff_result: ThreeWayDiffResult,
}

impl ThreeWayMergeResult {
    /// Returns the merged sequence, with conflicting regions omitted.
    #[must_use]
    pub fn merged_pieces(&self) -> &[String] {
        &self.merged_pieces
    }

    /// Returns true if no region conflicted.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.conflict_indices.is_empty()
    }

    /// Returns the conflicts in block order.
    #[must_use]
    pub fn conflict_blocks(&self) -> Vec<ConflictBlock<'_>> {
        let diff = &self.diff_result;
        self.conflict_indices
            .iter()
            .map(|&block_index| {
                let block = &diff.blocks[block_index];
                ConflictBlock {
                    block_index,
                    block,
                    base_pieces: diff.base_span(block).unwrap_or_default(),
                    old_pieces: diff.old_span(block).unwrap_or_default(),
                    new_pieces: diff.new_span(block).unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Returns the three-way diff the merge was built from.
    #[must_use]
    pub const fn diff_result(&self) -> &ThreeWayDiffResult {
        &self.diff_result
    }

    /// Joins the merged pieces with `separator`.
    ///
    /// Use `""` for pieces that keep their own terminators and `"\n"` for
    /// pieces from [`LineChunker`](crate::chunker::LineChunker).
    #[must_use]
    pub fn merged_text(&self, separator: &str) -> String {
        self.merged_pieces.join(separator)
    }

    /// Consumes the result, returning the merged pieces.
    #[must_use]
    pub fn into_merged_pieces(self) -> Vec<String> {
        self.merged_pieces
    }
}

/// Resolves every region of `diff_result`.
#[must_use]
#[instrument(skip_all, fields(blocks = diff_result.blocks().len()))]
pub fn merge(diff_result: ThreeWayDiffResult) -> ThreeWayMergeResult {
    let mut merged_pieces = Vec::with_capacity(diff_result.pieces_base().len());
    let mut conflict_indices = Vec::new();

    for (block_index, block) in diff_result.blocks().iter().enumerate() {
        let span = match block.change_type {
            ChangeType::Unchanged => diff_result.base_span(block),
            ChangeType::OldOnly | ChangeType::BothSame => diff_result.old_span(block),
            ChangeType::NewOnly => diff_result.new_span(block),
            ChangeType::Conflict => {
                conflict_indices.push(block_index);
                continue;
            }
        };
        merged_pieces.extend_from_slice(span.unwrap_or_default());
    }

    debug!(
        merged = merged_pieces.len(),
        conflicts = conflict_indices.len(),
        "merge synthesized"
    );
    ThreeWayMergeResult {
        merged_pieces,
        conflict_indices,
        diff_result,
    }
}

/// Chunks three texts, aligns them and merges the result.
///
/// # Errors
///
/// Returns an error if `options` is invalid or any text exceeds
/// `max_input_bytes`. Conflicts are not errors.
pub fn three_way_merge<C: Chunker + ?Sized>(
    base: &str,
    old: &str,
    new: &str,
    chunker: &C,
    options: &DiffOptions,
) -> Result<ThreeWayMergeResult, DiffError> {
    three_way_diff(base, old, new, chunker, options).map(merge)
}
