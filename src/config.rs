//! Session configuration: storage backend selection and reminder cadence.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 30 * 60;

/// Which storage backend the session persists through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Single-file JSON snapshot in a local directory.
    Local {
        /// Directory holding the snapshot file.
        data_dir: String,
    },
    /// Managed `PostgreSQL` table, one row per task.
    Remote {
        /// `PostgreSQL` connection string.
        database_url: String,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Local {
            data_dir: ".".to_owned(),
        }
    }
}

/// Complete session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage backend to persist through.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Seconds between importance reminder prompts.
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            reminder_interval_secs: DEFAULT_REMINDER_INTERVAL_SECS,
        }
    }
}

impl SessionConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is not valid JSON or does
    /// not match the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns the reminder cadence as a duration.
    #[must_use]
    pub const fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs)
    }
}

const fn default_reminder_interval_secs() -> u64 {
    DEFAULT_REMINDER_INTERVAL_SECS
}

/// Errors returned while reading session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid session configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
