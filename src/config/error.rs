//! Configuration loading errors.

use crate::core::IntervalError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a [`CounterConfig`](super::CounterConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has wrongly typed fields
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid interval_secs: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("Preset list must contain at least one interval")]
    EmptyPresets,

    #[error("Invalid preset interval of {seconds}s")]
    InvalidPreset { seconds: u32 },
}
