//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures used to parameterize runs. It provides:
//! 1. **Defaults:** Baseline frame count, generator ranges and output settings.
//! 2. **Structures:** Root config plus generator and output sections.
//! 3. **Loading:** JSON parsing from strings or files, followed by validation.
//!
//! Command-line flags override values read from a file; `Config::default()` is used when
//! no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    /// Frames available to each algorithm.
    pub const FRAMES: usize = 3;

    /// Shortest generated reference string.
    pub const MIN_LENGTH: usize = 10;

    /// Longest generated reference string.
    pub const MAX_LENGTH: usize = 20;

    /// Largest generated page number (pages are drawn from `0..=MAX_PAGE`).
    pub const MAX_PAGE: u64 = 9;
}

/// Output format for simulation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable summary and step tables.
    #[default]
    #[serde(alias = "Table")]
    Table,
    /// The result structures serialized as JSON.
    #[serde(alias = "Json", alias = "JSON")]
    Json,
}

/// Random reference string settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Minimum reference string length (inclusive)
    #[serde(default = "GeneratorConfig::default_min_length")]
    pub min_length: usize,

    /// Maximum reference string length (inclusive)
    #[serde(default = "GeneratorConfig::default_max_length")]
    pub max_length: usize,

    /// Largest page number to generate
    #[serde(default = "GeneratorConfig::default_max_page")]
    pub max_page: u64,

    /// Fixed seed for reproducible strings. Seeds from the clock when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    fn default_min_length() -> usize {
        defaults::MIN_LENGTH
    }

    fn default_max_length() -> usize {
        defaults::MAX_LENGTH
    }

    fn default_max_page() -> u64 {
        defaults::MAX_PAGE
    }

    /// Checks that the length range is non-empty and excludes zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] describing the problem.
    pub fn validate(&self) -> SimResult<()> {
        if self.min_length == 0 {
            return Err(SimError::Config(
                "generator.min_length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(SimError::Config(format!(
                "generator.min_length ({}) exceeds generator.max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            max_length: defaults::MAX_LENGTH,
            max_page: defaults::MAX_PAGE,
            seed: None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Print the side-by-side step table after the summary
    #[serde(default = "OutputConfig::default_show_steps")]
    pub show_steps: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn default_show_steps() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            format: OutputFormat::Table,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Config, OutputFormat};
///
/// let config = Config::default();
/// assert_eq!(config.frames, 3);
/// assert_eq!(config.output.format, OutputFormat::Table);
/// ```
///
/// Loading from JSON; missing fields fall back to their defaults:
///
/// ```
/// use pagesim_core::config::{Config, OutputFormat};
///
/// let json = r#"{
///     "frames": 4,
///     "generator": { "max_page": 5, "seed": 42 },
///     "output": { "format": "json" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.frames, 4);
/// assert_eq!(config.generator.max_page, 5);
/// assert_eq!(config.generator.min_length, 10);
/// assert_eq!(config.output.format, OutputFormat::Json);
/// assert!(config.output.show_steps);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Frames available to each algorithm
    #[serde(default = "Config::default_frames")]
    pub frames: usize,

    /// Random reference string settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Presentation settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or fails validation.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| SimError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the file cannot be read or its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|err| SimError::Config(format!("{}: {err}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for a zero frame count or an invalid generator range.
    pub fn validate(&self) -> SimResult<()> {
        if self.frames == 0 {
            return Err(SimError::Config("frames must be at least 1".to_string()));
        }
        self.generator.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
