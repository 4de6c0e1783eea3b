//! Shared configuration loader for the mathsift toolchain.
//!
//! `defaults/mathsift.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MathsiftConfig`]. Only collaborator knobs live here; the extraction and
//! cleanup rules are fixed behavior with no configuration surface.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mathsift_convert::ConverterOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mathsift.default.toml");

/// Top-level configuration consumed by mathsift applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MathsiftConfig {
    pub converter: ConverterConfig,
    pub output: OutputConfig,
}

/// Converter process settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    pub executable: String,
    pub extra_args: Vec<String>,
    pub keep_intermediate: bool,
}

impl ConverterConfig {
    /// The pipeline-facing options carried by this configuration.
    pub fn to_options(&self) -> ConverterOptions {
        ConverterOptions {
            executable: self.executable.clone(),
            extra_args: self.extra_args.clone(),
            keep_intermediate: self.keep_intermediate,
        }
    }
}

/// Output artifact settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub extension: String,
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
    pub fn build(self) -> Result<MathsiftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MathsiftConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.converter.executable, "pandoc");
        assert!(config.converter.extra_args.is_empty());
        assert!(!config.converter.keep_intermediate);
        assert_eq!(config.output.extension, "txt");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("converter.executable", "pandoc-3")
            .expect("override to apply")
            .set_override("converter.keep_intermediate", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.converter.executable, "pandoc-3");
        assert!(config.converter.keep_intermediate);
    }

    #[test]
    fn converts_to_pipeline_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options = config.converter.to_options();
        assert_eq!(options.executable, "pandoc");
        assert!(!options.keep_intermediate);
    }
}
