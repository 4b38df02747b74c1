//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration.

use std::path::PathBuf;

use progressive_store::database::{default_data_dir, DEFAULT_DB_FILE};

/// Where and how the local store is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Directory holding the database file.
    /// Env: `PROGRESSIVE_DATA_DIR`
    /// Default: the platform data directory, `None` if it cannot be found.
    pub data_dir: Option<PathBuf>,

    /// Database file name inside `data_dir`.
    /// Env: `PROGRESSIVE_DB_FILE`
    /// Default: `progressive.db`
    pub db_file: String,

    /// Keep everything in memory instead of on disk.
    /// Env: `PROGRESSIVE_IN_MEMORY` (true/1)
    /// Default: `false`
    pub in_memory: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().ok(),
            db_file: DEFAULT_DB_FILE.to_string(),
            in_memory: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("PROGRESSIVE_DATA_DIR") {
            if dir.trim().is_empty() {
                tracing::warn!("Empty PROGRESSIVE_DATA_DIR, using default");
            } else {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(file) = lookup("PROGRESSIVE_DB_FILE") {
            if file.trim().is_empty() || file.contains('/') || file.contains('\\') {
                tracing::warn!(value = %file, "Invalid PROGRESSIVE_DB_FILE, using default");
            } else {
                config.db_file = file;
            }
        }

        if let Some(val) = lookup("PROGRESSIVE_IN_MEMORY") {
            config.in_memory = val == "true" || val == "1";
        }

        config
    }

    /// Full path of the database file, if a data directory is known.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(&self.db_file))
    }
}
