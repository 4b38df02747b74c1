use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// The backend refused the operation (lock poisoned, storage offline).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The blocking worker running a storage call was lost.
    #[error("Storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Stored bytes do not deserialize to the expected shape.
    #[error("Corrupt data under key '{key}': {reason}")]
    CorruptData { key: String, reason: String },

    /// A value could not be serialized before writing.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// `true` when the stored value itself is unreadable, as opposed to the
    /// storage backend being unreachable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptData { .. })
    }

    /// `true` when the same call may succeed later.  A value that does not
    /// serialize, or a store that cannot be located or migrated, stays broken.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            StoreError::CorruptData { .. }
                | StoreError::Serialization(_)
                | StoreError::Migration(_)
                | StoreError::NoDataDir
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_backend_failures_are_transient() {
        assert!(StoreError::Unavailable("offline".into()).is_transient());

        let unserializable = StoreError::from(serde_json::from_str::<u32>("x").unwrap_err());
        assert!(!unserializable.is_transient());
        assert!(!unserializable.is_corrupt());
        assert!(!StoreError::NoDataDir.is_transient());
    }
}
