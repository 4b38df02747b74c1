//! CRUD operations over the stored workout collection.
//!
//! Every operation re-reads the collection through the [`Gateway`]; nothing
//! is cached between calls.  Writes replace the whole collection.  Two
//! overlapping writes are not serialized against each other, so callers
//! must not issue concurrent writes.

use chrono::Utc;
use tracing::{info, warn};

use progressive_shared::schema::{commit_workout, validate_workout};
use progressive_shared::{RecordError, Workout, WorkoutDraft, WorkoutId};
use progressive_store::{Gateway, KeyValueStore, StoreError};

use crate::error::{ClientError, Result};

/// Workout collection, most recently created first.
pub struct WorkoutRepository<S: ?Sized> {
    gateway: Gateway<S>,
}

impl<S: ?Sized> Clone for WorkoutRepository<S> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<S: KeyValueStore + ?Sized + 'static> WorkoutRepository<S> {
    pub fn new(gateway: Gateway<S>) -> Self {
        Self { gateway }
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// All workouts, most recently created first.
    ///
    /// A collection that was never written, or one that no longer parses,
    /// reads as empty.
    pub async fn list_workouts(&self) -> Result<Vec<Workout>> {
        self.load().await
    }

    /// Fetch a single workout by id.
    pub async fn get_workout(&self, id: &WorkoutId) -> Result<Workout> {
        self.load()
            .await?
            .into_iter()
            .find(|w| &w.id == id)
            .ok_or_else(|| ClientError::NotFound(id.clone()))
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Validate and commit a new workout at the front of the collection.
    ///
    /// An id is allocated unless the draft carries one; a supplied id that
    /// is already taken is rejected.  Invalid drafts never touch storage.
    pub async fn save_workout(&self, draft: &WorkoutDraft) -> Result<Workout> {
        validate_workout(draft)?;

        let mut workouts = self.load().await?;
        let now = Utc::now();

        let id = match &draft.id {
            Some(id) if workouts.iter().any(|w| &w.id == id) => {
                return Err(RecordError::DuplicateId(id.clone()).into());
            }
            Some(id) => id.clone(),
            None => {
                let newest = workouts.iter().map(|w| &w.id).max_by_key(|id| id.as_millis());
                WorkoutId::next_after(now, newest)
            }
        };

        let workout = commit_workout(draft, id, now)?;
        workouts.insert(0, workout.clone());
        self.gateway.write_workouts(&workouts).await?;

        info!(
            id = %workout.id,
            name = %workout.name,
            exercises = workout.exercises.len(),
            volume = workout.volume,
            "workout saved"
        );
        Ok(workout)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the workout `id` in place.
    ///
    /// The id, creation date and position in the collection are kept; the
    /// volume is recomputed from the new sets.
    pub async fn update_workout(&self, id: &WorkoutId, draft: &WorkoutDraft) -> Result<Workout> {
        validate_workout(draft)?;

        let mut workouts = self.load().await?;
        let slot = workouts
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| ClientError::NotFound(id.clone()))?;

        let updated = commit_workout(draft, slot.id.clone(), slot.date)?;
        *slot = updated.clone();
        self.gateway.write_workouts(&workouts).await?;

        info!(id = %updated.id, volume = updated.volume, "workout updated");
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove the workout `id`.  Deleting an unknown id is an error.
    pub async fn delete_workout(&self, id: &WorkoutId) -> Result<()> {
        let mut workouts = self.load().await?;
        let position = workouts
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| ClientError::NotFound(id.clone()))?;

        workouts.remove(position);
        self.gateway.write_workouts(&workouts).await?;

        info!(id = %id, remaining = workouts.len(), "workout deleted");
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Workout>> {
        match self.gateway.read_workouts().await {
            Ok(workouts) => Ok(workouts.unwrap_or_default()),
            Err(StoreError::CorruptData { key, reason }) => {
                warn!(%key, %reason, "stored workout collection is unreadable, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
