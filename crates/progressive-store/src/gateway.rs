//! Async persistence gateway.
//!
//! The [`Gateway`] is the only way the rest of the application touches
//! durable state.  It serializes typed values to JSON, runs the blocking
//! backend call on the Tokio blocking pool and classifies failures as either
//! [`StoreError::CorruptData`] (the stored bytes are bad) or one of the
//! "storage unavailable" variants.
//!
//! A call that has been issued always runs to completion on the worker, even
//! if the awaiting future is dropped.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use progressive_shared::constants::KEY_WORKOUTS;
use progressive_shared::Workout;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Typed async access to a [`KeyValueStore`].
///
/// `S` may be a concrete backend or `dyn KeyValueStore` when the backend is
/// chosen at runtime.
pub struct Gateway<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for Gateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore + 'static> Gateway<S> {
    pub fn new(store: S) -> Self {
        Self::from_arc(Arc::new(store))
    }
}

impl<S: KeyValueStore + ?Sized + 'static> Gateway<S> {
    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The backend this gateway writes to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // ------------------------------------------------------------------
    // Raw string values
    // ------------------------------------------------------------------

    /// Read the plain string stored under `key`.
    pub async fn read_field(&self, key: &'static str) -> Result<Option<String>> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.get(key)).await?
    }

    /// Replace the plain string stored under `key`.
    pub async fn write_field(&self, key: &'static str, value: String) -> Result<()> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.set(key, &value)).await??;
        tracing::debug!(key, "value written");
        Ok(())
    }

    /// Delete `key`.  Returns `true` if a value was present.
    pub async fn remove_field(&self, key: &'static str) -> Result<bool> {
        let store = Arc::clone(&self.store);
        let removed = tokio::task::spawn_blocking(move || store.remove(key)).await??;
        tracing::debug!(key, removed, "value removed");
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // JSON values
    // ------------------------------------------------------------------

    /// Read and deserialize the JSON value under `key`.
    ///
    /// Returns `Ok(None)` if the key was never written and
    /// [`StoreError::CorruptData`] if the stored text is not a valid `T`.
    pub async fn read_json<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>> {
        let Some(raw) = self.read_field(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::CorruptData {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// Serialize `value` and store it under `key`, replacing the old value.
    pub async fn write_json<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.write_field(key, json).await
    }

    // ------------------------------------------------------------------
    // Workout collection
    // ------------------------------------------------------------------

    /// Read the stored workout collection, most recent first.
    pub async fn read_workouts(&self) -> Result<Option<Vec<Workout>>> {
        self.read_json(KEY_WORKOUTS).await
    }

    /// Replace the stored workout collection.
    pub async fn write_workouts(&self, workouts: &[Workout]) -> Result<()> {
        self.write_json(KEY_WORKOUTS, workouts).await?;
        tracing::info!(count = workouts.len(), "workout collection written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::kv::MemoryStore;
    use chrono::Utc;
    use progressive_shared::constants::KEY_USER_EMAIL;
    use progressive_shared::WorkoutId;

    fn workout(id: &str) -> Workout {
        Workout {
            id: WorkoutId::new(id),
            date: Utc::now(),
            name: format!("Workout {id}"),
            exercises: Vec::new(),
            volume: 0.0,
        }
    }

    #[tokio::test]
    async fn never_written_key_is_absent() {
        let gateway = Gateway::new(MemoryStore::new());
        assert!(gateway.read_workouts().await.unwrap().is_none());
        assert!(gateway.read_field(KEY_USER_EMAIL).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn workouts_round_trip_through_sqlite() {
        let gateway = Gateway::new(Database::open_in_memory().unwrap());
        let stored = vec![workout("2"), workout("1")];

        gateway.write_workouts(&stored).await.unwrap();
        assert_eq!(gateway.read_workouts().await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn write_replaces_whole_collection() {
        let gateway = Gateway::new(MemoryStore::new());
        gateway
            .write_workouts(&[workout("2"), workout("1")])
            .await
            .unwrap();
        gateway.write_workouts(&[workout("3")]).await.unwrap();

        let read = gateway.read_workouts().await.unwrap().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id.as_str(), "3");
    }

    #[tokio::test]
    async fn malformed_collection_is_corrupt() {
        let gateway = Gateway::new(MemoryStore::new());
        gateway
            .write_field(KEY_WORKOUTS, "[{\"id\": 1, \"details\": [\"Bench\"]".into())
            .await
            .unwrap();

        let err = gateway.read_workouts().await.unwrap_err();
        assert!(err.is_corrupt(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn offline_backend_is_not_corrupt() {
        let gateway = Gateway::new(MemoryStore::new());
        gateway.store().set_online(false);

        let err = gateway.read_workouts().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(!err.is_corrupt());
    }

    #[tokio::test]
    async fn remove_reports_presence() {
        let gateway = Gateway::new(MemoryStore::new());
        gateway
            .write_field(KEY_USER_EMAIL, "me@example.com".into())
            .await
            .unwrap();

        assert!(gateway.remove_field(KEY_USER_EMAIL).await.unwrap());
        assert!(!gateway.remove_field(KEY_USER_EMAIL).await.unwrap());
    }
}
