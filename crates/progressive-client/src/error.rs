use thiserror::Error;

use progressive_shared::{RecordError, WorkoutId};
use progressive_store::StoreError;

/// Errors surfaced to the UI layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Validation failed; nothing was written.
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// No workout with this id exists.
    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    /// Device storage could not be reached or refused the write.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(StoreError),

    /// A stored value is unreadable.
    #[error("Corrupt data: {0}")]
    CorruptData(StoreError),
}

impl From<StoreError> for ClientError {
    fn from(e: StoreError) -> Self {
        if e.is_corrupt() {
            ClientError::CorruptData(e)
        } else {
            ClientError::StorageUnavailable(e)
        }
    }
}

impl ClientError {
    /// Whether re-issuing the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::StorageUnavailable(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Short message suitable for a toast or inline form error.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidRecord(e) => e.to_string(),
            ClientError::NotFound(_) => "This workout no longer exists.".to_string(),
            ClientError::StorageUnavailable(e) if e.is_transient() => {
                "Could not reach device storage. Please try again.".to_string()
            }
            ClientError::StorageUnavailable(_) => "Could not write to device storage.".to_string(),
            ClientError::CorruptData(_) => "Stored data could not be read.".to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
