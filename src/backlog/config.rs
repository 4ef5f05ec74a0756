//! Layered configuration for the storied binary.
//!
//! `defaults/storied.default.toml` is embedded so documented defaults and runtime behavior
//! stay in sync. Callers layer user files and single-key overrides on top via [Loader]
//! before deserializing into [StoriedConfig].

use crate::backlog::formats::FormatOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/storied.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoriedConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
    pub diagnostics: DiagnosticsConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_line_numbers: bool,
    pub label_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    pub interval_secs: u64,
}

impl StoriedConfig {
    /// Options for the format registry
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            pretty: self.output.pretty,
            show_line_numbers: self.treeviz.show_line_numbers,
            label_width: self.treeviz.label_width,
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
    pub fn build(self) -> Result<StoriedConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StoriedConfig, ConfigError> {
    Loader::new().build()
}
