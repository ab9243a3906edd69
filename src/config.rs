//! Game configuration
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! min_password_length = 1
//! max_password_length = 36
//! ```
//!
//! Missing keys take their defaults. A file that cannot be read, parsed, or
//! that describes an unusable range is reported and replaced by the defaults.

use crate::core::MAX_SYMBOLS;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "bulls_cows.toml";

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 1;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = MAX_SYMBOLS;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("password length range {min}..={max} must lie within 1..=36")]
    InvalidBounds { min: usize, max: usize },
}

/// Bounds applied to the code length chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub min_password_length: usize,
    pub max_password_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl GameConfig {
    /// Create a configuration with explicit bounds
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBounds` unless `1 <= min <= max <= 36`.
    pub fn new(min_password_length: usize, max_password_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            min_password_length,
            max_password_length,
        };
        config.check_bounds()?;
        Ok(config)
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::InvalidBounds` for an unusable range.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or if its
    /// bounds are unusable.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse_at(&content, path)?;
        info!(
            min = config.min_password_length,
            max = config.max_password_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Load a configuration, falling back to the defaults on any failure
    ///
    /// Failures are logged as warnings and never surfaced to the caller.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|err| {
            warn!(error = %err, "Error loading config; using default values");
            Self::default()
        })
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check_bounds()?;
        Ok(config)
    }

    fn check_bounds(self) -> Result<(), ConfigError> {
        let Self {
            min_password_length: min,
            max_password_length: max,
        } = self;
        if min == 0 || min > max || max > MAX_SYMBOLS {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_password_length, 1);
        assert_eq!(config.max_password_length, 36);
    }

    #[test]
    fn parse_full_config() {
        let config = GameConfig::from_toml("min_password_length = 3\nmax_password_length = 8\n")
            .unwrap();
        assert_eq!(config, GameConfig::new(3, 8).unwrap());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = GameConfig::from_toml("max_password_length = 6").unwrap();
        assert_eq!(config.min_password_length, 1);
        assert_eq!(config.max_password_length, 6);

        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            GameConfig::from_toml("min.password.length = 2"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            GameConfig::from_toml("min_password_length = \"two\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_unusable_bounds() {
        for (min, max) in [(0, 5), (6, 5), (1, 37)] {
            assert!(matches!(
                GameConfig::new(min, max),
                Err(ConfigError::InvalidBounds { .. })
            ));
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_password_length = 2").unwrap();
        writeln!(file, "max_password_length = 10").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::new(2, 10).unwrap());
        assert_eq!(GameConfig::load_or_default(file.path()), config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            GameConfig::from_file(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_password_length = 99").unwrap();

        assert_eq!(
            GameConfig::load_or_default(file.path()),
            GameConfig::default()
        );
    }
}
