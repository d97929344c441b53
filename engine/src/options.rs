//! Comparison options.

use serde::{Deserialize, Serialize};

use crate::diff::{DiffAlgorithm, LongestRunDiff, MyersDiff};
use crate::error::{DiffError, InputSide};

/// Alignment algorithm used by the pairwise aligner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Divide-and-conquer around the longest common run.
    #[default]
    LongestRun,
    /// Myers' O(ND) shortest edit script.
    Myers,
}

impl Algorithm {
    /// Returns the implementation for this algorithm.
    #[must_use]
    pub fn implementation(self) -> &'static dyn DiffAlgorithm {
        static LONGEST_RUN: LongestRunDiff = LongestRunDiff::new();
        static MYERS: MyersDiff = MyersDiff::new();
        match self {
            Self::LongestRun => &LONGEST_RUN,
            Self::Myers => &MYERS,
        }
    }
}

/// Options shared by pairwise and three-way comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Compare pieces case-insensitively (default: false)
    #[serde(default)]
    pub ignore_case: bool,

    /// Ignore leading and trailing whitespace of each piece (default: false)
    #[serde(default)]
    pub ignore_whitespace: bool,

    /// Pairwise alignment algorithm (default: longest-run)
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Maximum size of any single text input in bytes (default: 10MB)
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            ignore_whitespace: false,
            algorithm: Algorithm::default(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl DiffOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-insensitive comparison.
    #[must_use]
    pub const fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Sets whitespace-insensitive comparison.
    #[must_use]
    pub const fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Selects the pairwise alignment algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the per-input size limit in bytes.
    #[must_use]
    pub const fn max_input_bytes(mut self, max: usize) -> Self {
        self.max_input_bytes = max;
        self
    }

    /// Validates the option combination.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfiguration`] if `max_input_bytes` is zero.
    pub fn validate(&self) -> Result<&Self, DiffError> {
        if self.max_input_bytes == 0 {
            return Err(DiffError::InvalidConfiguration(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }

    /// Checks one text input against the size limit.
    pub(crate) fn check_text(&self, input: InputSide, text: &str) -> Result<(), DiffError> {
        self.check_len(input, text.len())
    }

    /// Checks one piece sequence against the size limit.
    pub(crate) fn check_pieces(&self, input: InputSide, pieces: &[String]) -> Result<(), DiffError> {
        self.check_len(input, pieces.iter().map(String::len).sum())
    }

    fn check_len(&self, input: InputSide, actual: usize) -> Result<(), DiffError> {
        if actual > self.max_input_bytes {
            return Err(DiffError::InputTooLarge {
                input,
                max: self.max_input_bytes,
                actual,
            });
        }
        Ok(())
    }
}

fn default_max_input_bytes() -> usize {
    10 * 1024 * 1024
}
