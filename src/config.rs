//! Configuration for the address book
//!
//! Centralized configuration with sensible defaults. Loaded from a JSON file:
//!
//! ```json
//! {
//!   "csvPath": "data/contacts.csv",
//!   "batchSize": 100
//! }
//! ```
//!
//! A missing file is replaced by the defaults, which are written back to disk.
//! `ADDRBOOK_CSV_PATH` overrides `csvPath` after the file is read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AddressBookError, Result};

/// Environment variable that overrides the CSV path
pub const CSV_PATH_ENV: &str = "ADDRBOOK_CSV_PATH";

/// Default location of the contact table
pub const DEFAULT_CSV_PATH: &str = "data/contacts.csv";

/// Default number of rows per save/load batch
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Main configuration for an address book instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the CSV file holding the contacts
    pub csv_path: PathBuf,

    /// Rows written (and flushed) or parsed per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from a JSON file
    ///
    /// If the file does not exist the default configuration is saved to
    /// `path` and returned. Environment overrides are applied afterwards.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config file missing, writing defaults");
                let config = Self::default();
                config.save(path)?;
                config
            }
            Err(e) => {
                return Err(AddressBookError::Config(format!(
                    "failed to open config file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a JSON string (no environment overrides)
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| AddressBookError::Config(format!("failed to decode config: {}", e)))
    }

    /// Save configuration as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AddressBookError::Config(format!("failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AddressBookError::Config(format!("failed to encode config: {}", e)))?;

        fs::write(path, json + "\n")
            .map_err(|e| AddressBookError::Config(format!("failed to write config file: {}", e)))
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(AddressBookError::Config("CSV path is required".to_string()));
        }
        if self.batch_size == 0 {
            return Err(AddressBookError::Config(
                "batch size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(CSV_PATH_ENV) {
            if !val.is_empty() {
                self.csv_path = PathBuf::from(val);
            }
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the CSV file path
    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.csv_path = path.into();
        self
    }

    /// Set the number of rows per batch
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
