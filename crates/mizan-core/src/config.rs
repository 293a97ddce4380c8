//! Tracker configuration
//!
//! Configures where the journal lives and which habits are tracked. The
//! file is TOML; a missing file is the valid first-run state and yields
//! the defaults.

use crate::error::{MizanError, Result};
use crate::habits::{HabitCatalog, DEFAULT_BONUS_HABITS, DEFAULT_REQUIRED_HABITS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default journal location, relative to the working directory
pub const DEFAULT_JOURNAL_PATH: &str = "data/journal.csv";

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the append-only journal CSV
    pub journal_path: PathBuf,

    /// Required habits, in canonical order
    pub required_habits: Vec<String>,

    /// Bonus habits, in canonical order
    pub bonus_habits: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
            required_habits: DEFAULT_REQUIRED_HABITS.map(String::from).to_vec(),
            bonus_habits: DEFAULT_BONUS_HABITS.map(String::from).to_vec(),
        }
    }
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the journal path
    pub fn with_journal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal_path = path.into();
        self
    }

    /// The required-habit catalog
    pub fn required_catalog(&self) -> HabitCatalog {
        HabitCatalog::new(self.required_habits.iter().cloned())
    }

    /// The bonus-habit catalog
    pub fn bonus_catalog(&self) -> HabitCatalog {
        HabitCatalog::new(self.bonus_habits.iter().cloned())
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MizanError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Load configuration, falling back to defaults
    ///
    /// A missing file is the first-run state and is silent; an unreadable
    /// or unparsable file is logged and also falls back.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring bad config file");
                Self::default()
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MizanError::Config(format!("cannot serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
