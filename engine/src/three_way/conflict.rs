//! Change ranges and their grouping into regions of the base.
//!
//! Both pairwise diffs are anchored to the base. Two changes interact when
//! their base ranges intersect, or when both insert at the same base
//! position. Interacting changes are grouped transitively, so no edit block
//! from either side is ever split. An insertion at the exact boundary of the
//! other side's change does not interact with it and is ordered first.

use std::ops::Range;

use crate::diff::EditBlock;

/// A change from one pairwise diff, in base and target coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChangeRange {
    /// Range in base (inclusive start, exclusive end).
    pub base_range: Range<usize>,
    /// Range in target (inclusive start, exclusive end).
    pub target_range: Range<usize>,
}

impl From<&EditBlock> for ChangeRange {
    fn from(block: &EditBlock) -> Self {
        Self {
            base_range: block.delete_start..block.delete_end(),
            target_range: block.insert_start..block.insert_end(),
        }
    }
}

impl ChangeRange {
    /// Returns true if the change only inserts (zero base width).
    pub fn is_insertion(&self) -> bool {
        self.base_range.is_empty()
    }

    fn starts_before(&self, other: &Self) -> bool {
        self.base_range.start < other.base_range.start
            || (self.base_range.start == other.base_range.start && self.is_insertion())
    }

    fn interacts_with(&self, region: &Range<usize>) -> bool {
        let overlaps = self.base_range.start < region.end && self.base_range.end > region.start;
        let same_insertion_point =
            self.is_insertion() && region.is_empty() && self.base_range.start == region.start;
        overlaps || same_insertion_point
    }
}

/// Which sides contribute changes to a region.
///
/// Every slice is non-empty, so a region without changes cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sides<'a> {
    /// Only the old side changed the region.
    Old(&'a [ChangeRange]),
    /// Only the new side changed the region.
    New(&'a [ChangeRange]),
    /// Both sides changed the region.
    Both {
        old: &'a [ChangeRange],
        new: &'a [ChangeRange],
    },
}

/// A maximal group of interacting changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Region<'a> {
    /// Base range covered by the group.
    pub base: Range<usize>,
    /// Changes grouped into the region.
    pub sides: Sides<'a>,
}

impl<'a> Region<'a> {
    /// Changes from the old side, in order.
    pub fn old_changes(&self) -> &'a [ChangeRange] {
        match self.sides {
            Sides::Old(old) | Sides::Both { old, .. } => old,
            Sides::New(_) => &[],
        }
    }

    /// Changes from the new side, in order.
    pub fn new_changes(&self) -> &'a [ChangeRange] {
        match self.sides {
            Sides::New(new) | Sides::Both { new, .. } => new,
            Sides::Old(_) => &[],
        }
    }

    /// Returns the end of this region in a side's coordinates, given the
    /// side's position at the region start.
    pub fn side_end(&self, changes: &[ChangeRange], side_start: usize) -> usize {
        match changes.last() {
            Some(last) => last.target_range.end + (self.base.end - last.base_range.end),
            None => side_start + self.base.len(),
        }
    }
}

/// Groups two ordered change lists into regions, in base order.
pub(crate) fn group_changes<'a>(old: &'a [ChangeRange], new: &'a [ChangeRange]) -> Vec<Region<'a>> {
    let mut regions = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < old.len() || j < new.len() {
        let (old_first, new_first) = (i, j);
        let take_old = match (old.get(i), new.get(j)) {
            (Some(a), Some(b)) => a.starts_before(b),
            (Some(_), None) => true,
            _ => false,
        };
        let mut base = if take_old {
            i += 1;
            old[old_first].base_range.clone()
        } else {
            j += 1;
            new[new_first].base_range.clone()
        };

        loop {
            let mut grew = false;
            if let Some(change) = old.get(i) {
                if change.interacts_with(&base) {
                    base.end = base.end.max(change.base_range.end);
                    i += 1;
                    grew = true;
                }
            }
            if let Some(change) = new.get(j) {
                if change.interacts_with(&base) {
                    base.end = base.end.max(change.base_range.end);
                    j += 1;
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        let (old, new) = (&old[old_first..i], &new[new_first..j]);
        let sides = if take_old && new.is_empty() {
            Sides::Old(old)
        } else if !take_old && old.is_empty() {
            Sides::New(new)
        } else {
            Sides::Both { old, new }
        };
        regions.push(Region { base, sides });
    }

    regions
}
