//! Shared configuration loader for bnf-merge.
//!
//! `defaults/bnf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BnfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/bnf.default.toml");

/// Top-level configuration consumed by bnf-merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BnfConfig {
    pub source: SourceConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// Which files under the root are treated as grammar sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub extension: String,
    pub follow_links: bool,
}

impl SourceConfig {
    /// File-name suffix (including the dot) selecting grammar files.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: "bnf".to_string(),
            follow_links: false,
        }
    }
}

/// Line parser behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub reset_cursor_per_file: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            reset_cursor_per_file: true,
        }
    }
}

/// Where and how the merged grammar is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "grammar.json".to_string(),
            indent: 4,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
