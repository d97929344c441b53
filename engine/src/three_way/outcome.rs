//! Outcome types for three-way diff operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a region of the base was changed by the two branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    /// Neither branch changed the region.
    Unchanged,
    /// Only the old branch changed the region.
    OldOnly,
    /// Only the new branch changed the region.
    NewOnly,
    /// Both branches made the same change.
    BothSame,
    /// Both branches changed the region differently.
    Conflict,
}

impl ChangeType {
    /// Returns true for every classification except [`ChangeType::Unchanged`].
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::OldOnly => write!(f, "old-only"),
            Self::NewOnly => write!(f, "new-only"),
            Self::BothSame => write!(f, "both-same"),
            Self::Conflict => write!(f, "conflict"),
        }
    }
}

/// A classified region spanning the base, old and new sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreeWayBlock {
    /// Start index in the base sequence.
    pub base_start: usize,
    /// Number of base pieces in the region.
    pub base_count: usize,
    /// Start index in the old sequence.
    pub old_start: usize,
    /// Number of old pieces in the region.
    pub old_count: usize,
    /// Start index in the new sequence.
    pub new_start: usize,
    /// Number of new pieces in the region.
    pub new_count: usize,
    /// Classification of the region.
    pub change_type: ChangeType,
}

impl ThreeWayBlock {
    /// Returns the end of the base span (exclusive).
    #[must_use]
    pub const fn base_end(&self) -> usize {
        self.base_start + self.base_count
    }

    /// Returns the end of the old span (exclusive).
    #[must_use]
    pub const fn old_end(&self) -> usize {
        self.old_start + self.old_count
    }

    /// Returns the end of the new span (exclusive).
    #[must_use]
    pub const fn new_end(&self) -> usize {
        self.new_start + self.new_count
    }
}

/// The outcome of a three-way diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeWayDiffResult {
    pub(crate) pieces_base: Vec<String>,
    pub(crate) pieces_old: Vec<String>,
    pub(crate) pieces_new: Vec<String>,
    pub(crate) blocks: Vec<ThreeWayBlock>,
}

impl ThreeWayDiffResult {
    /// Returns the base sequence.
    #[must_use]
    pub fn pieces_base(&self) -> &[String] {
        &self.pieces_base
    }

    /// Returns the old sequence.
    #[must_use]
    pub fn pieces_old(&self) -> &[String] {
        &self.pieces_old
    }

    /// Returns the new sequence.
    #[must_use]
    pub fn pieces_new(&self) -> &[String] {
        &self.pieces_new
    }

    /// Returns every classified block, unchanged regions included.
    #[must_use]
    pub fn blocks(&self) -> &[ThreeWayBlock] {
        &self.blocks
    }

    /// Returns the blocks that are not [`ChangeType::Unchanged`].
    pub fn changes(&self) -> impl Iterator<Item = &ThreeWayBlock> {
        self.blocks.iter().filter(|b| b.change_type.is_change())
    }

    /// Returns the number of conflicting blocks.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.change_type == ChangeType::Conflict)
            .count()
    }

    /// Returns the base pieces covered by `block`, or `None` if the block
    /// does not fit within this result's base sequence.
    #[must_use]
    pub fn base_span(&self, block: &ThreeWayBlock) -> Option<&[String]> {
        span(&self.pieces_base, block.base_start, block.base_count)
    }

    /// Returns the old pieces covered by `block`, or `None` if out of range.
    #[must_use]
    pub fn old_span(&self, block: &ThreeWayBlock) -> Option<&[String]> {
        span(&self.pieces_old, block.old_start, block.old_count)
    }

    /// Returns the new pieces covered by `block`, or `None` if out of range.
    #[must_use]
    pub fn new_span(&self, block: &ThreeWayBlock) -> Option<&[String]> {
        span(&self.pieces_new, block.new_start, block.new_count)
    }
}

fn span(pieces: &[String], start: usize, count: usize) -> Option<&[String]> {
    pieces.get(start..start.checked_add(count)?)
}
