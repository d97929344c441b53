//! Integration tests for three-way diffing and merging.
//!
//! Covers region classification, conflict records, non-interference of
//! disjoint edits and merged text reconstruction across chunkers.

use anyhow::Result;
use chunkdiff::chunker::{CharacterChunker, LineChunker, LineEndingsPreservingChunker, WordChunker};
use chunkdiff::{
    Algorithm, ChangeType, DiffOptions, merge, three_way_diff, three_way_diff_pieces,
    three_way_merge,
};

mod common;

/// Test independent edits on separate lines merge cleanly.
#[test]
fn test_independent_edits_merge() -> Result<()> {
    common::init_tracing();

    let diff = three_way_diff_pieces(
        common::pieces(&["L1", "L2", "L3"]),
        common::pieces(&["L1", "L2x", "L3"]),
        common::pieces(&["L1", "L2", "L3y"]),
        &DiffOptions::default(),
    )?;

    let changes: Vec<_> = diff.changes().copied().collect();
    assert_eq!(changes.len(), 2);
    assert_eq!(
        (changes[0].change_type, changes[0].base_start, changes[0].base_count),
        (ChangeType::OldOnly, 1, 1)
    );
    assert_eq!(
        (changes[1].change_type, changes[1].base_start, changes[1].base_count),
        (ChangeType::NewOnly, 2, 1)
    );

    let result = merge(diff);
    assert!(result.is_successful());
    assert_eq!(result.merged_pieces(), &["L1", "L2x", "L3y"]);
    Ok(())
}

/// Test conflicting edits produce a conflict record.
#[test]
fn test_conflicting_edits() -> Result<()> {
    common::init_tracing();

    let result = three_way_merge(
        "L1\nL2\nL3",
        "L1\nA\nL3",
        "L1\nB\nL3",
        &LineChunker::new(),
        &DiffOptions::default(),
    )?;

    assert!(!result.is_successful());
    assert_eq!(result.merged_pieces(), &["L1", "L3"]);

    let conflicts = result.conflict_blocks();
    assert_eq!(conflicts.len(), 1);
    let conflict = conflicts[0];
    assert_eq!(conflict.base_pieces(), &["L2"]);
    assert_eq!(conflict.old_pieces(), &["A"]);
    assert_eq!(conflict.new_pieces(), &["B"]);
    assert_eq!(conflict.block().change_type, ChangeType::Conflict);
    assert_eq!(result.diff_result().conflict_count(), 1);
    Ok(())
}

/// Test swapping the branches flips the conflict record.
#[test]
fn test_conflict_symmetry() -> Result<()> {
    common::init_tracing();

    let chunker = LineChunker::new();
    let options = DiffOptions::default();
    let forward = three_way_merge("a\nb\nc", "a\nX\nc", "a\nY\nc", &chunker, &options)?;
    let backward = three_way_merge("a\nb\nc", "a\nY\nc", "a\nX\nc", &chunker, &options)?;

    let (f, b) = (forward.conflict_blocks()[0], backward.conflict_blocks()[0]);
    assert_eq!(f.old_pieces(), b.new_pieces());
    assert_eq!(f.new_pieces(), b.old_pieces());
    assert_eq!(f.base_pieces(), b.base_pieces());
    Ok(())
}

/// Test identical edits on both branches are accepted once.
#[test]
fn test_identical_edits_are_both_same() -> Result<()> {
    common::init_tracing();

    let result = three_way_merge(
        "a\nb\nc",
        "a\nfixed\nc",
        "a\nfixed\nc",
        &LineChunker::new(),
        &DiffOptions::default(),
    )?;

    assert!(result.is_successful());
    assert_eq!(
        common::change_kinds(result.diff_result()),
        vec![ChangeType::BothSame]
    );
    assert_eq!(result.merged_text("\n"), "a\nfixed\nc");
    Ok(())
}

/// Test three-way identity yields one unchanged block.
#[test]
fn test_three_way_identity() -> Result<()> {
    common::init_tracing();

    let text = "one\ntwo\nthree\n";
    let result = three_way_merge(
        text,
        text,
        text,
        &LineEndingsPreservingChunker::new(),
        &DiffOptions::default(),
    )?;

    let blocks = result.diff_result().blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].change_type, ChangeType::Unchanged);
    assert_eq!(blocks[0].base_count, 3);
    assert!(result.is_successful());
    assert_eq!(result.merged_text(""), text);
    Ok(())
}

/// Test a change in one region does not disturb another.
#[test]
fn test_non_interference() -> Result<()> {
    common::init_tracing();

    let base = "a\nb\nc\nd\ne\nf";
    let conflicted = three_way_diff(
        base,
        "a\nB1\nc\nd\ne\nf",
        "a\nB2\nc\nd\ne\nF",
        &LineChunker::new(),
        &DiffOptions::default(),
    )?;
    common::assert_tiles(&conflicted);
    assert_eq!(
        common::change_kinds(&conflicted),
        vec![ChangeType::Conflict, ChangeType::NewOnly]
    );

    let clean = three_way_diff(
        base,
        "a\nb\nc\nd\ne\nf",
        "a\nb\nc\nd\ne\nF",
        &LineChunker::new(),
        &DiffOptions::default(),
    )?;
    let last = conflicted.changes().last().copied();
    assert_eq!(clean.changes().last().copied(), last);
    Ok(())
}

/// Test adjacent edits from both branches collide when they overlap.
#[test]
fn test_overlapping_ranges_conflict() -> Result<()> {
    common::init_tracing();

    let result = three_way_merge(
        "1\n2\n3\n4\n5",
        "1\nx\ny\n4\n5",
        "1\n2\nz\nw\n5",
        &LineChunker::new(),
        &DiffOptions::default(),
    )?;

    assert!(!result.is_successful());
    let conflict = result.conflict_blocks()[0];
    assert_eq!(conflict.base_pieces(), &["2", "3", "4"]);
    assert_eq!(conflict.old_pieces(), &["x", "y", "4"]);
    assert_eq!(conflict.new_pieces(), &["2", "z", "w"]);
    assert_eq!(result.merged_pieces(), &["1", "5"]);
    Ok(())
}

/// Test word-level merges of a single sentence.
#[test]
fn test_word_level_merge() -> Result<()> {
    common::init_tracing();

    let result = three_way_merge(
        "the quick brown fox jumps",
        "the slow brown fox jumps",
        "the quick brown fox leaps",
        &WordChunker::new(),
        &DiffOptions::default(),
    )?;

    assert!(result.is_successful());
    assert_eq!(result.merged_text(""), "the slow brown fox leaps");
    Ok(())
}

/// Test both algorithms produce tiled classifications.
#[test]
fn test_algorithms_tile_three_way_results() -> Result<()> {
    common::init_tracing();

    for algorithm in [Algorithm::LongestRun, Algorithm::Myers] {
        let result = three_way_diff(
            "kitten sitting on the mat",
            "mitten sitting on a mat!",
            "kitten knitting on the hat",
            &CharacterChunker::new(),
            &DiffOptions::new().algorithm(algorithm),
        )?;
        common::assert_tiles(&result);
    }
    Ok(())
}

/// Test that empty inputs yield an empty, successful merge.
#[test]
fn test_empty_inputs() -> Result<()> {
    let result = three_way_merge(
        "",
        "",
        "",
        &CharacterChunker::new(),
        &DiffOptions::default(),
    )?;
    assert!(result.is_successful());
    assert!(result.diff_result().blocks().is_empty());
    assert_eq!(result.merged_text(""), "");
    Ok(())
}
