//! Error types for the diff engine.
//!
//! Every failure is a validation failure raised before any alignment work
//! starts. The alignment algorithms themselves are total over well-formed
//! input, and a conflicted merge is reported as data, not as an error.

use std::fmt;
use thiserror::Error;

/// Identifies which input of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    /// The common ancestor of a three-way comparison.
    Base,
    /// The left input of a pairwise diff, or the first branch of a three-way diff.
    Old,
    /// The right input of a pairwise diff, or the second branch of a three-way diff.
    New,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// Errors raised by the diff engine.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A caller-supplied value is structurally invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A chunker or option set is malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An input exceeds the configured size limit.
    #[error("Input '{input}' too large (max {max} bytes, got {actual})")]
    InputTooLarge {
        /// Which input exceeded the limit.
        input: InputSide,
        /// Maximum allowed size in bytes.
        max: usize,
        /// Actual size in bytes.
        actual: usize,
    },

    /// Settings could not be loaded or deserialized.
    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
