//! Persisted dashboard settings stored as TOML in the app directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirError};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Number of data rows kept from the source file when nothing is configured.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;
/// Upper bound for the configured preview size.
pub const MAX_PREVIEW_ROWS: usize = 10_000;
/// Default number of memoized classifications kept per session.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved.
    #[error("No usable config directory: {0}")]
    Directory(#[from] AppDirError),
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
}

/// Loader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Number of leading data rows kept after loading.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
        }
    }
}

/// Classifier cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Maximum memoized texts; `0` keeps every entry.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl AppConfig {
    /// Clamp values into their supported ranges.
    pub fn normalized(mut self) -> Self {
        self.dataset.preview_rows = clamp_preview_rows(self.dataset.preview_rows);
        self
    }
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

pub(crate) fn clamp_preview_rows(rows: usize) -> usize {
    rows.clamp(1, MAX_PREVIEW_ROWS)
}

/// Resolve the configuration file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory.
///
/// A missing file yields defaults, which are written back so the settings are
/// discoverable. Failing to write them is logged and otherwise ignored.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let config = AppConfig::default();
    if let Err(err) = save_to_path(&config, &path) {
        tracing::warn!("Could not write default config: {err}");
    }
    Ok(config)
}

/// Parse a config file, clamping out-of-range values.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map(AppConfig::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
