//! Myers diff algorithm.

use tracing::trace;

use crate::diff::optimization::coalesce_blocks;
use crate::diff::{DiffAlgorithm, EditBlock, common_prefix_len, common_suffix_len};
use crate::piece::PieceId;

/// Myers diff algorithm.
///
/// This implementation uses the classic O(ND) algorithm described by Eugene Myers
/// in "An O(ND) Difference Algorithm and Its Variations" (1986). The common
/// prefix and suffix are stripped before the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl MyersDiff {
    /// Creates new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff(&self, old: &[PieceId], new: &[PieceId]) -> Vec<EditBlock> {
        let prefix = common_prefix_len(old, new);
        let suffix = common_suffix_len(&old[prefix..], &new[prefix..]);
        let old_middle = &old[prefix..old.len() - suffix];
        let new_middle = &new[prefix..new.len() - suffix];

        if old_middle.is_empty() && new_middle.is_empty() {
            return Vec::new();
        }
        if old_middle.is_empty() || new_middle.is_empty() {
            return vec![EditBlock::new(
                prefix,
                old_middle.len(),
                prefix,
                new_middle.len(),
            )];
        }

        let ses = compute_ses(old_middle, new_middle);
        let mut blocks = convert_ses_to_blocks(&ses, prefix, prefix);
        coalesce_blocks(&mut blocks);
        blocks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditOp {
    Insert,
    Delete,
    Keep,
}

/// Computes the shortest edit script between two sequences.
///
/// `trace[d]` holds the furthest-reaching x per diagonal before round `d`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn compute_ses(old: &[PieceId], new: &[PieceId]) -> Vec<EditOp> {
    let (n, m) = (old.len() as isize, new.len() as isize);
    let max_d = n + m;
    let offset = max_d;
    let mut v: Vec<isize> = vec![0; 2 * max_d as usize + 2];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'outer: for d in 0..=max_d {
        trace.push(v.clone());
        for k in (-d..=d).step_by(2) {
            let k_idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[k_idx - 1] < v[k_idx + 1]) {
                v[k_idx + 1]
            } else {
                v[k_idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            v[k_idx] = x;
            if x >= n && y >= m {
                break 'outer;
            }
        }
    }

    trace!(rounds = trace.len(), "myers search finished");
    backtrack(n, m, &trace, offset)
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn backtrack(n: isize, m: isize, trace: &[Vec<isize>], offset: isize) -> Vec<EditOp> {
    let (mut edits, mut x, mut y) = (Vec::new(), n, m);

    for (d, v) in trace.iter().enumerate().skip(1).rev() {
        let d = d as isize;
        let k = x - y;
        let k_idx = (k + offset) as usize;
        let prev_k = if k == -d || (k != d && v[k_idx - 1] < v[k_idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push(EditOp::Keep);
            x -= 1;
            y -= 1;
        }
        if x == prev_x {
            edits.push(EditOp::Insert);
        } else {
            edits.push(EditOp::Delete);
        }
        x = prev_x;
        y = prev_y;
    }

    while x > 0 && y > 0 {
        edits.push(EditOp::Keep);
        x -= 1;
        y -= 1;
    }

    edits.reverse();
    edits
}

/// Groups consecutive non-keep operations into edit blocks.
pub(crate) fn convert_ses_to_blocks(
    ses: &[EditOp],
    old_offset: usize,
    new_offset: usize,
) -> Vec<EditBlock> {
    let (mut blocks, mut x, mut y, mut cur) = (Vec::new(), old_offset, new_offset, None::<EditBlock>);
    for edit in ses {
        match edit {
            EditOp::Keep => {
                if let Some(block) = cur.take() {
                    blocks.push(block);
                }
                x += 1;
                y += 1;
            }
            EditOp::Delete => {
                cur.get_or_insert(EditBlock::new(x, 0, y, 0)).delete_count += 1;
                x += 1;
            }
            EditOp::Insert => {
                cur.get_or_insert(EditBlock::new(x, 0, y, 0)).insert_count += 1;
                y += 1;
            }
        }
    }
    if let Some(block) = cur {
        blocks.push(block);
    }
    blocks
}
