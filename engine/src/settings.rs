//! Engine settings.
//!
//! Settings are layered: built-in defaults first, then an optional file,
//! then environment variables prefixed with `CHUNKDIFF` using `__` as the
//! nesting separator (for example `CHUNKDIFF__DIFF__IGNORE_CASE=true` or
//! `CHUNKDIFF__CHUNKER__KIND=word`).
//!
//! # Example
//!
//! ```
//! use chunkdiff::EngineSettings;
//!
//! let settings = EngineSettings::new().expect("Failed to load settings");
//! let chunker = settings.build_chunker().unwrap();
//! ```

use std::path::Path;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chunker::{ChunkPolicy, Chunker};
use crate::error::DiffError;
use crate::options::DiffOptions;

/// Top-level settings for the diff engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Comparison options.
    #[serde(default)]
    pub diff: DiffOptions,
    /// Chunking policy.
    #[serde(default)]
    pub chunker: ChunkPolicy,
}

impl EngineSettings {
    /// Loads settings from defaults and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built, deserialized
    /// or validated.
    pub fn new() -> Result<Self, DiffError> {
        Self::load(Self::builder()?)
    }

    /// Loads settings from defaults, the file at `path`, and environment
    /// variables. The format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if the
    /// resulting settings are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading settings file");
        Self::load(Self::builder()?.add_source(File::from(path).required(true)))
    }

    /// Builds the chunker described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfiguration`] if the policy is invalid.
    pub fn build_chunker(&self) -> Result<Box<dyn Chunker>, DiffError> {
        self.chunker.build()
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfiguration`] on the first invalid value.
    pub fn validate(&self) -> Result<(), DiffError> {
        self.diff.validate()?;
        self.chunker.build().map(drop)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, DiffError> {
        Ok(Config::builder()
            .set_default("diff.algorithm", "longest-run")?
            .set_default("chunker.kind", "line")?)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, DiffError> {
        let settings: Self = builder
            .add_source(
                Environment::with_prefix("CHUNKDIFF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}
