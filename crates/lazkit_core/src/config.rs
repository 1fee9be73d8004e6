//! Launcher configuration.
//!
//! Loaded from a YAML file next to wherever the launcher runs (the
//! deployment keeps a `config.yaml` in the logger's working directory).
//! Every field has a default matching the original deployment constants, so
//! the launcher still works with a partial file or none at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tide::{DEFAULT_SAMPLING_SECS, DEFAULT_STATION};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// NOAA CO-OPS station id of the tide gauge nearest the deployment.
    pub station: String,

    /// Sampling cadence settings.
    pub sampling: SamplingConfig,

    /// Logger process settings.
    pub logger: LoggerConfig,
}

/// Sampling cadence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Baseline sampling time in seconds, used outside high-tide windows.
    #[serde(rename = "time")]
    pub seconds: u32,
}

/// Logger process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Path to the logger binary.
    pub bin: PathBuf,

    /// Directory holding one logger config file per cadence
    /// (`config-<seconds>.yaml`).
    pub conf_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            station: DEFAULT_STATION.to_string(),
            sampling: SamplingConfig::default(),
            logger: LoggerConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_SAMPLING_SECS,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            bin: PathBuf::from("livox_logger"),
            conf_dir: PathBuf::from("conf"),
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The file was not valid YAML for this shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: String,
        /// Underlying YAML failure.
        source: serde_yaml::Error,
    },
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing or unreadable file is an error; the caller decides whether
    /// to fall back to [`Config::default`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
