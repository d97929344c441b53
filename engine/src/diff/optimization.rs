//! Post-processing of raw alignment output.

use super::EditBlock;

/// Merges blocks that touch in both sequences.
///
/// Alignment strategies may emit two blocks with an empty unchanged gap
/// between them at a recursion or script boundary. Callers only ever see the
/// merged form.
pub(crate) fn coalesce_blocks(blocks: &mut Vec<EditBlock>) {
    if blocks.len() < 2 {
        return;
    }

    let mut i = 0;
    while i < blocks.len() - 1 {
        let (current, next) = (blocks[i], blocks[i + 1]);
        if current.delete_end() == next.delete_start && current.insert_end() == next.insert_start
        {
            blocks[i].delete_count += next.delete_count;
            blocks[i].insert_count += next.insert_count;
            blocks.remove(i + 1);
            continue;
        }
        i += 1;
    }
}
