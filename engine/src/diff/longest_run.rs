//! Longest-common-run alignment.
//!
//! The common prefix and suffix are stripped first. The remaining middle is
//! split around the longest contiguous run of ids shared by both sides, and
//! the ranges before and after that run are aligned the same way until no
//! shared run is left. Pending ranges live on an explicit work list, so stack
//! depth does not grow with the input.
//!
//! Each range is searched in time linear in its length: a suffix automaton
//! is built over the right-hand range and the left-hand range is streamed
//! through it once.
//!
//! When several runs share the maximal length, the one starting earliest in
//! the left sequence wins, then the one starting earliest in the right.

use std::collections::HashMap;
use std::ops::Range;

use tracing::trace;

use super::optimization::coalesce_blocks;
use super::{DiffAlgorithm, EditBlock, common_prefix_len, common_suffix_len};
use crate::piece::PieceId;

/// Divide-and-conquer alignment around the longest common run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestRunDiff;

impl LongestRunDiff {
    /// Creates new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LongestRunDiff {
    fn diff(&self, old: &[PieceId], new: &[PieceId]) -> Vec<EditBlock> {
        let prefix = common_prefix_len(old, new);
        let suffix = common_suffix_len(&old[prefix..], &new[prefix..]);
        let old_middle = prefix..old.len() - suffix;
        let new_middle = prefix..new.len() - suffix;

        let mut blocks = Vec::new();
        let mut pending = vec![(old_middle, new_middle)];
        let mut steps = 0_usize;

        while let Some((old_range, new_range)) = pending.pop() {
            steps += 1;
            if old_range.is_empty() && new_range.is_empty() {
                continue;
            }
            match longest_run(old, old_range.clone(), new, new_range.clone()) {
                Some(run) => {
                    // Pushed in reverse so the earlier range is aligned first.
                    pending.push((run.old_end()..old_range.end, run.new_end()..new_range.end));
                    pending.push((old_range.start..run.old_start, new_range.start..run.new_start));
                }
                None => blocks.push(EditBlock::new(
                    old_range.start,
                    old_range.len(),
                    new_range.start,
                    new_range.len(),
                )),
            }
        }

        trace!(steps, blocks = blocks.len(), "longest-run alignment finished");
        coalesce_blocks(&mut blocks);
        blocks
    }
}

/// A run of equal ids shared by both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    old_start: usize,
    new_start: usize,
    len: usize,
}

impl Run {
    const fn old_end(self) -> usize {
        self.old_start + self.len
    }

    const fn new_end(self) -> usize {
        self.new_start + self.len
    }
}

/// Finds the longest run common to `old[old_range]` and `new[new_range]`.
///
/// The first left-hand end position reaching the maximal length wins, which
/// is also the earliest left-hand start. For that run the automaton yields
/// the earliest right-hand occurrence.
fn longest_run(
    old: &[PieceId],
    old_range: Range<usize>,
    new: &[PieceId],
    new_range: Range<usize>,
) -> Option<Run> {
    if old_range.is_empty() || new_range.is_empty() {
        return None;
    }

    let automaton = SuffixAutomaton::build(new, new_range);
    let mut best: Option<Run> = None;
    let (mut state, mut len) = (SuffixAutomaton::ROOT, 0);

    for (i, &id) in (old_range.start..).zip(&old[old_range]) {
        (state, len) = automaton.advance(state, len, id);
        if len > best.map_or(0, |run| run.len) {
            best = Some(Run {
                old_start: i + 1 - len,
                new_start: automaton.first_end(state) + 1 - len,
                len,
            });
        }
    }

    best
}

#[derive(Debug, Clone, Default)]
struct State {
    /// Length of the longest string in this state's class.
    len: usize,
    link: Option<usize>,
    /// Absolute index of the last piece of the first occurrence.
    first_end: usize,
    next: HashMap<PieceId, usize>,
}

/// Suffix automaton over one range of a sequence.
///
/// Every substring of the range is spelled by exactly one path from the
/// root, and all strings ending in the same state share their end positions.
struct SuffixAutomaton {
    states: Vec<State>,
}

impl SuffixAutomaton {
    const ROOT: usize = 0;

    fn build(seq: &[PieceId], range: Range<usize>) -> Self {
        let mut states = Vec::with_capacity(2 * range.len() + 1);
        states.push(State::default());
        let mut last = Self::ROOT;

        for (pos, &id) in (range.start..).zip(&seq[range]) {
            let cur = states.len();
            states.push(State {
                len: states[last].len + 1,
                link: None,
                first_end: pos,
                next: HashMap::new(),
            });

            let mut p = Some(last);
            while let Some(q) = p {
                if states[q].next.contains_key(&id) {
                    break;
                }
                states[q].next.insert(id, cur);
                p = states[q].link;
            }

            let link = match p {
                None => Self::ROOT,
                Some(p) => {
                    let q = states[p].next[&id];
                    if states[p].len + 1 == states[q].len {
                        q
                    } else {
                        let clone = states.len();
                        let copy = State {
                            len: states[p].len + 1,
                            link: states[q].link,
                            first_end: states[q].first_end,
                            next: states[q].next.clone(),
                        };
                        states.push(copy);
                        let mut r = Some(p);
                        while let Some(s) = r {
                            match states[s].next.get_mut(&id) {
                                Some(target) if *target == q => *target = clone,
                                _ => break,
                            }
                            r = states[s].link;
                        }
                        states[q].link = Some(clone);
                        clone
                    }
                }
            };
            states[cur].link = Some(link);
            last = cur;
        }

        Self { states }
    }

    /// Extends the current match by `id`, dropping its oldest pieces until
    /// the extension occurs in the range. Returns the new state and length.
    fn advance(&self, mut state: usize, mut len: usize, id: PieceId) -> (usize, usize) {
        loop {
            if let Some(&next) = self.states[state].next.get(&id) {
                return (next, len + 1);
            }
            match self.states[state].link {
                Some(link) => {
                    state = link;
                    len = self.states[link].len;
                }
                None => return (Self::ROOT, 0),
            }
        }
    }

    fn first_end(&self, state: usize) -> usize {
        self.states[state].first_end
    }
}
