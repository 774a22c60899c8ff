//! Session configuration.
//!
//! A [`CounterConfig`] describes how a fresh session starts: its initial
//! count, its auto-increment interval, and the interval presets offered to
//! the settings picker. It is read from TOML; every field is optional.

use crate::core::{CounterState, Interval, PRESET_SECONDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod error;

pub use error::ConfigError;

/// Starting values for a counter session.
///
/// # Example
///
/// ```rust
/// use counterplus::config::CounterConfig;
///
/// let config = CounterConfig::from_toml_str("interval_secs = 5").unwrap();
/// assert_eq!(config.interval_secs, 5);
/// assert_eq!(config.initial_count, 0);
/// assert_eq!(config.presets.len(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Count shown when the session starts
    pub initial_count: i64,

    /// Auto-increment interval in whole seconds
    pub interval_secs: u32,

    /// Interval choices offered by the settings picker, in seconds
    pub presets: Vec<u32>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            interval_secs: Interval::DEFAULT.as_secs() as u32,
            presets: PRESET_SECONDS.to_vec(),
        }
    }
}

impl CounterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            interval_secs = config.interval_secs,
            "loaded counter config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Interval::from_secs(self.interval_secs)?;
        validate_presets(&self.presets)
    }

    pub fn interval(&self) -> Result<Interval, ConfigError> {
        Ok(Interval::from_secs(self.interval_secs)?)
    }

    /// Snapshot a session built from this config starts with. Auto mode is
    /// always off at session start.
    pub fn initial_state(&self) -> Result<CounterState, ConfigError> {
        Ok(CounterState::new(self.initial_count, self.interval()?))
    }
}

/// Check a preset list: at least one entry, none of them zero.
pub fn validate_presets(presets: &[u32]) -> Result<(), ConfigError> {
    if presets.is_empty() {
        return Err(ConfigError::EmptyPresets);
    }
    if let Some(&seconds) = presets.iter().find(|&&s| s == 0) {
        return Err(ConfigError::InvalidPreset { seconds });
    }
    Ok(())
}
