//! Editor configuration.

use crate::camera::DEFAULT_VIEWPORT_UNIT;
use crate::storage::{FileStorage, STORAGE_KEY, StorageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Bad config: {0}")]
    BadConfig(#[from] serde_json::Error),
    #[error("Viewport unit must be positive, got {0}")]
    InvalidUnit(f64),
}

/// Editor configuration, read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Viewport span of one grid step.
    pub viewport_unit: f64,
    /// Record name the deck autosaves under.
    pub storage_key: String,
    /// Storage directory; the platform data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_unit: DEFAULT_VIEWPORT_UNIT,
            storage_key: STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the user config from the platform config directory, falling back
    /// to defaults when there is none.
    pub fn load_user() -> Result<Self, ConfigError> {
        let Some(path) = Self::user_config_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// `~/.config/prex/config.json` on Linux.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prex").join("config.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_unit.is_finite() && self.viewport_unit > 0.0) {
            return Err(ConfigError::InvalidUnit(self.viewport_unit));
        }
        Ok(())
    }

    /// Open the file storage this configuration points at.
    pub fn storage(&self) -> StorageResult<FileStorage> {
        match &self.data_dir {
            Some(dir) => FileStorage::new(dir.clone()),
            None => FileStorage::default_location(),
        }
    }
}
