//! Shared test utilities for integration tests.
//!
//! Provides tracing setup and small helpers for building piece sequences
//! and checking structural properties of diff results.

#![allow(dead_code)]

use std::sync::Once;

use chunkdiff::{ChangeType, DiffResult, ThreeWayDiffResult};

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Converts string slices into owned pieces.
pub fn pieces(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Replays a pairwise result into owned pieces.
pub fn replayed(result: &DiffResult) -> Vec<String> {
    result.replay().into_iter().map(str::to_string).collect()
}

/// Returns the classifications of every non-unchanged block.
pub fn change_kinds(result: &ThreeWayDiffResult) -> Vec<ChangeType> {
    result.changes().map(|b| b.change_type).collect()
}

/// Asserts that three-way blocks tile all three sequences without gaps.
pub fn assert_tiles(result: &ThreeWayDiffResult) {
    let (mut base, mut old, mut new) = (0, 0, 0);
    for block in result.blocks() {
        assert_eq!(
            (block.base_start, block.old_start, block.new_start),
            (base, old, new),
            "block {block:?} does not continue the previous one"
        );
        if block.change_type == ChangeType::Unchanged {
            assert_eq!(result.base_span(block), result.old_span(block));
            assert_eq!(result.base_span(block), result.new_span(block));
        }
        base = block.base_end();
        old = block.old_end();
        new = block.new_end();
    }
    assert_eq!(base, result.pieces_base().len());
    assert_eq!(old, result.pieces_old().len());
    assert_eq!(new, result.pieces_new().len());
}
