//! Shared configuration loader for the chartab toolchain.
//!
//! `defaults/chartab.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ChartabConfig`].

use chartab::ScriptSources;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/chartab.default.toml");

/// Top-level configuration consumed by chartab applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartabConfig {
    pub chart: ChartDefaults,
    pub page: PageDefaults,
    pub scripts: ScriptsConfig,
}

/// Default chart sizing and zoom behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartDefaults {
    pub width: u32,
    pub height: u32,
    pub zoom: String,
}

/// Page-level defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDefaults {
    pub title: String,
    pub output_dir: String,
}

/// Where generated pages load their script dependencies from.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptsConfig {
    pub jquery: String,
    pub highcharts: String,
    pub highstock: String,
}

impl From<ScriptsConfig> for ScriptSources {
    fn from(config: ScriptsConfig) -> Self {
        ScriptSources {
            jquery: config.jquery,
            highcharts: config.highcharts,
            highstock: config.highstock,
        }
    }
}

impl From<&ScriptsConfig> for ScriptSources {
    fn from(config: &ScriptsConfig) -> Self {
        ScriptSources {
            jquery: config.jquery.clone(),
            highcharts: config.highcharts.clone(),
            highstock: config.highstock.clone(),
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ChartabConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ChartabConfig, ConfigError> {
    Loader::new().build()
}
