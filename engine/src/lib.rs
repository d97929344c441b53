//! chunkdiff - Token-sequence diff and three-way merge engine.
//!
//! This crate compares texts as sequences of pieces produced by a pluggable
//! chunker, and reports which contiguous runs were added, removed or left
//! unchanged. For three inputs it classifies every region of the common
//! ancestor and synthesizes a merged sequence.
//!
//! # Features
//!
//! - **Chunking**: character, line, line-preserving, word, delimiter and
//!   custom policies
//! - **Pairwise alignment**: longest-common-run and Myers algorithms behind
//!   one trait
//! - **Three-way alignment**: per-region classification against a base
//! - **Merge synthesis**: merged output plus explicit conflict records
//! - **Configuration**: layered settings via the `config` crate
//!
//! # Example
//!
//! ```rust
//! use chunkdiff::chunker::LineChunker;
//! use chunkdiff::{DiffOptions, three_way_merge};
//!
//! # fn example() -> Result<(), chunkdiff::DiffError> {
//! let result = three_way_merge(
//!     "L1\nL2\nL3",
//!     "L1\nL2x\nL3",
//!     "L1\nL2\nL3y",
//!     &LineChunker::new(),
//!     &DiffOptions::default(),
//! )?;
//!
//! assert!(result.is_successful());
//! assert_eq!(result.merged_text("\n"), "L1\nL2x\nL3y");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod chunker;
pub mod diff;
pub mod error;
pub mod merge;
pub mod options;
pub mod piece;
pub mod settings;
pub mod three_way;

// Re-export commonly used types
pub use chunker::{ChunkPolicy, Chunker};
pub use diff::{DiffAlgorithm, DiffResult, EditBlock, diff, diff_pieces};
pub use error::{DiffError, InputSide};
pub use merge::{ConflictBlock, ThreeWayMergeResult, merge, three_way_merge};
pub use options::{Algorithm, DiffOptions};
pub use piece::{PieceId, PieceIndex};
pub use settings::EngineSettings;
pub use three_way::{
    ChangeType, ThreeWayBlock, ThreeWayDiffResult, three_way_diff, three_way_diff_pieces,
};

/// Version of the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes logging for applications embedding the engine.
///
/// Honors `RUST_LOG`, falling back to `info`. The engine never installs a
/// subscriber on its own.
///
/// # Errors
///
/// Returns an error if the tracing subscriber has already been set.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
}
