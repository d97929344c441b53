//! Three-way alignment.
//!
//! This module compares a base sequence with two derived versions, `old` and
//! `new`, and classifies every region of the base by how the two versions
//! changed it.
//!
//! # Example
//!
//! ```
//! use chunkdiff::chunker::LineChunker;
//! use chunkdiff::{ChangeType, DiffOptions, three_way_diff};
//!
//! let base = "line1\nline2\nline3";
//! let old = "line1\nmodified\nline3";
//! let new = "line1\nline2\nline3\nline4";
//!
//! let result = three_way_diff(base, old, new, &LineChunker::new(), &DiffOptions::default()).unwrap();
//! let kinds: Vec<ChangeType> = result.changes().map(|b| b.change_type).collect();
//! assert_eq!(kinds, vec![ChangeType::OldOnly, ChangeType::NewOnly]);
//! ```

pub mod algorithm;
pub(crate) mod conflict;
pub mod outcome;

pub use algorithm::{three_way_diff, three_way_diff_pieces};
pub use outcome::{ChangeType, ThreeWayBlock, ThreeWayDiffResult};
