use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for Film-Styler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoder settings for the written files
    pub output: OutputConfig,

    /// Grain random source settings
    pub grain: GrainConfig,

    /// Batch rendering settings
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

/// Output encoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JPEG quality (1-100)
    pub quality: u8,

    /// Ask the codec for optimized encoding when it supports it
    pub optimize: bool,

    /// Ask the codec for progressive encoding when it supports it
    pub progressive: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quality: 95,
            optimize: true,
            progressive: true,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::InvalidValue {
                key: "output.quality".to_string(),
                value: self.quality.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Grain configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrainConfig {
    /// Fixed seed for reproducible grain; entropy is used when unset
    pub seed: Option<u64>,
}

/// Batch rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Source photo used when no input is given on the command line
    pub input: PathBuf,

    /// Directory receiving one file per rendered style
    pub output_dir: PathBuf,

    /// Extension (and therefore format) of the written files
    pub extension: String,

    /// Number of parallel rendering threads
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("images/input/input.jpg"),
            output_dir: PathBuf::from("images/output"),
            extension: "jpg".to_string(),
            jobs: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "batch.jobs".to_string(),
                value: self.jobs.to_string()
            }.into());
        }

        if !matches!(self.extension.to_lowercase().as_str(), "jpg" | "jpeg" | "png") {
            return Err(ConfigError::InvalidValue {
                key: "batch.extension".to_string(),
                value: self.extension.clone()
            }.into());
        }

        Ok(())
    }
}
