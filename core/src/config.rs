//! Dispatcher configuration
//!
//! Tuning knobs loaded from a TOML file. A missing file means defaults,
//! and the defaults are the classic values: a 60 second spawn window and
//! a 180 second countdown for timed effects without their own duration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dispatcher tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Seconds between effect dispatches (the progress-meter window)
    pub spawn_window_secs: u64,

    /// Countdown for timed effects whose definition has no override
    pub default_timed_duration_secs: i32,

    /// RNG seed for reproducible runs (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            spawn_window_secs: 60,
            default_timed_duration_secs: 180,
            seed: None,
        }
    }
}

impl ModConfig {
    /// The spawn window as the millisecond denominator used by the
    /// progress meter
    pub fn spawn_window_millis(&self) -> u64 {
        self.spawn_window_secs * 1000
    }

    /// Load a config from `path`. A missing file yields the defaults; a
    /// present but malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save this config to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;

        fs::write(path, contents).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Default user config directory (`<config_dir>/mayhem`)
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mayhem"))
}

/// Errors that can occur while loading or saving config files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_values() {
        let config = ModConfig::default();
        assert_eq!(config.spawn_window_secs, 60);
        assert_eq!(config.spawn_window_millis(), 60_000);
        assert_eq!(config.default_timed_duration_secs, 180);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.spawn_window_secs, 60);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: ModConfig = toml::from_str("spawn_window_secs = 30").unwrap();
        assert_eq!(config.spawn_window_secs, 30);
        assert_eq!(config.default_timed_duration_secs, 180);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.toml");

        let config = ModConfig {
            spawn_window_secs: 45,
            default_timed_duration_secs: 90,
            seed: Some(1234),
        };
        config.save(&path).unwrap();

        let loaded = ModConfig::load(&path).unwrap();
        assert_eq!(loaded.spawn_window_secs, 45);
        assert_eq!(loaded.default_timed_duration_secs, 90);
        assert_eq!(loaded.seed, Some(1234));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.toml");
        fs::write(&path, "spawn_window_secs = \"sixty\"").unwrap();

        let err = ModConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
