//! Three-way alignment algorithm.

use tracing::{debug, instrument, trace};

use crate::chunker::Chunker;
use crate::diff::{EditBlock, align};
use crate::error::{DiffError, InputSide};
use crate::options::DiffOptions;
use crate::piece::{PieceId, PieceIndex};
use crate::three_way::conflict::{ChangeRange, Sides, group_changes};
use crate::three_way::outcome::{ChangeType, ThreeWayBlock, ThreeWayDiffResult};

/// Chunks three texts and classifies how `old` and `new` diverge from `base`.
///
/// # Errors
///
/// Returns an error if `options` is invalid or any text exceeds
/// `max_input_bytes`.
#[instrument(
    skip_all,
    fields(base_bytes = base.len(), old_bytes = old.len(), new_bytes = new.len())
)]
pub fn three_way_diff<C: Chunker + ?Sized>(
    base: &str,
    old: &str,
    new: &str,
    chunker: &C,
    options: &DiffOptions,
) -> Result<ThreeWayDiffResult, DiffError> {
    options.validate()?;
    options.check_text(InputSide::Base, base)?;
    options.check_text(InputSide::Old, old)?;
    options.check_text(InputSide::New, new)?;
    Ok(three_way_unchecked(
        chunker.chunk(base),
        chunker.chunk(old),
        chunker.chunk(new),
        options,
    ))
}

/// Classifies three already-chunked sequences.
///
/// # Errors
///
/// Returns an error if `options` is invalid or any sequence exceeds
/// `max_input_bytes`.
#[instrument(
    skip_all,
    fields(base_len = base.len(), old_len = old.len(), new_len = new.len())
)]
pub fn three_way_diff_pieces(
    base: Vec<String>,
    old: Vec<String>,
    new: Vec<String>,
    options: &DiffOptions,
) -> Result<ThreeWayDiffResult, DiffError> {
    options.validate()?;
    options.check_pieces(InputSide::Base, &base)?;
    options.check_pieces(InputSide::Old, &old)?;
    options.check_pieces(InputSide::New, &new)?;
    Ok(three_way_unchecked(base, old, new, options))
}

fn three_way_unchecked(
    base: Vec<String>,
    old: Vec<String>,
    new: Vec<String>,
    options: &DiffOptions,
) -> ThreeWayDiffResult {
    let mut index = PieceIndex::new(options);
    let base_ids = index.index_all(&base);
    let old_ids = index.index_all(&old);
    let new_ids = index.index_all(&new);

    let to_old = align(options.algorithm, &base_ids, &old_ids);
    let to_new = align(options.algorithm, &base_ids, &new_ids);
    let blocks = classify(&base_ids, &old_ids, &new_ids, &to_old, &to_new);

    debug!(
        distinct = index.len(),
        blocks = blocks.len(),
        conflicts = blocks
            .iter()
            .filter(|b| b.change_type == ChangeType::Conflict)
            .count(),
        "three-way diff computed"
    );

    ThreeWayDiffResult {
        pieces_base: base,
        pieces_old: old,
        pieces_new: new,
        blocks,
    }
}

/// Walks both base-anchored diffs and emits one block per region.
///
/// Cursors in all three sequences advance together through unchanged gaps;
/// every region of interacting changes becomes a single classified block.
pub(crate) fn classify(
    base: &[PieceId],
    old: &[PieceId],
    new: &[PieceId],
    to_old: &[EditBlock],
    to_new: &[EditBlock],
) -> Vec<ThreeWayBlock> {
    let old_changes: Vec<ChangeRange> = to_old.iter().map(ChangeRange::from).collect();
    let new_changes: Vec<ChangeRange> = to_new.iter().map(ChangeRange::from).collect();

    let mut blocks = Vec::new();
    let (mut base_pos, mut old_pos, mut new_pos) = (0, 0, 0);

    for region in group_changes(&old_changes, &new_changes) {
        let gap = region.base.start - base_pos;
        if gap > 0 {
            blocks.push(ThreeWayBlock {
                base_start: base_pos,
                base_count: gap,
                old_start: old_pos,
                old_count: gap,
                new_start: new_pos,
                new_count: gap,
                change_type: ChangeType::Unchanged,
            });
            base_pos += gap;
            old_pos += gap;
            new_pos += gap;
        }

        let old_end = region.side_end(region.old_changes(), old_pos);
        let new_end = region.side_end(region.new_changes(), new_pos);
        let change_type = match region.sides {
            Sides::Old(_) => ChangeType::OldOnly,
            Sides::New(_) => ChangeType::NewOnly,
            Sides::Both { .. } if old[old_pos..old_end] == new[new_pos..new_end] => {
                ChangeType::BothSame
            }
            Sides::Both { .. } => ChangeType::Conflict,
        };
        trace!(
            base = ?region.base,
            old = ?(old_pos..old_end),
            new = ?(new_pos..new_end),
            %change_type,
            "region classified"
        );

        blocks.push(ThreeWayBlock {
            base_start: base_pos,
            base_count: region.base.len(),
            old_start: old_pos,
            old_count: old_end - old_pos,
            new_start: new_pos,
            new_count: new_end - new_pos,
            change_type,
        });
        base_pos = region.base.end;
        old_pos = old_end;
        new_pos = new_end;
    }

    let rest = base.len() - base_pos;
    if rest > 0 {
        blocks.push(ThreeWayBlock {
            base_start: base_pos,
            base_count: rest,
            old_start: old_pos,
            old_count: rest,
            new_start: new_pos,
            new_count: rest,
            change_type: ChangeType::Unchanged,
        });
    }

    coalesce_regions(&mut blocks);
    blocks
}

/// Merges neighbouring blocks that carry the same classification.
fn coalesce_regions(blocks: &mut Vec<ThreeWayBlock>) {
    let mut i = 0;
    while i + 1 < blocks.len() {
        let next = blocks[i + 1];
        let current = &mut blocks[i];
        if current.change_type == next.change_type {
            current.base_count += next.base_count;
            current.old_count += next.old_count;
            current.new_count += next.new_count;
            blocks.remove(i + 1);
            continue;
        }
        i += 1;
    }
}
