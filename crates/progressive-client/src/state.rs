//! Application state shared by every UI entry point.
//!
//! [`AppState`] wires the repository, profile and session services onto one
//! storage backend.  It holds no workout data itself: every query goes back
//! to storage.

use std::sync::Arc;

use progressive_store::{Database, Gateway, KeyValueStore, MemoryStore, StoreError};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::metrics::{self, DashboardSummary, PersonalRecord};
use crate::profile::ProfileService;
use crate::repository::WorkoutRepository;
use crate::session::{PlaceholderIssuer, SessionManager};

/// Backend chosen at runtime.
pub type DynStore = dyn KeyValueStore;

/// Central application state.
pub struct AppState {
    /// Workout history.
    pub workouts: WorkoutRepository<DynStore>,

    /// Device owner's profile.
    pub profile: ProfileService<DynStore>,

    /// Login state and local registration.
    pub session: SessionManager<DynStore, PlaceholderIssuer>,
}

impl AppState {
    /// Open the store described by `config`.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let store: Arc<DynStore> = if config.in_memory {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        } else {
            let dir = config.data_dir.as_ref().ok_or(StoreError::NoDataDir)?;
            std::fs::create_dir_all(dir).map_err(StoreError::from)?;

            let path = dir.join(&config.db_file);
            tracing::info!(path = %path.display(), "opening database");
            Arc::new(Database::open_at(&path)?)
        };

        Ok(Self::with_store(store))
    }

    /// Build the services on an already opened backend.
    pub fn with_store(store: Arc<DynStore>) -> Self {
        let gateway = Gateway::from_arc(store);
        Self {
            workouts: WorkoutRepository::new(gateway.clone()),
            profile: ProfileService::new(gateway.clone()),
            session: SessionManager::new(gateway, PlaceholderIssuer),
        }
    }

    /// Fresh dashboard numbers.
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        let workouts = self.workouts.list_workouts().await?;
        Ok(metrics::dashboard_summary(&workouts))
    }

    /// Best set per exercise for the progress view.
    pub async fn personal_records(&self) -> Result<Vec<PersonalRecord>> {
        let workouts = self.workouts.list_workouts().await?;
        Ok(metrics::personal_records(&workouts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progressive_shared::{ExerciseDraft, SetDraft, WorkoutDraft};

    fn in_memory() -> AppState {
        AppState::open(&ClientConfig {
            data_dir: None,
            db_file: "unused.db".into(),
            in_memory: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn dashboard_reflects_saved_workouts() {
        let app = in_memory();
        assert_eq!(app.dashboard().await.unwrap().completed, 0);

        app.workouts
            .save_workout(
                &WorkoutDraft::new("Push Day").with_exercise(
                    ExerciseDraft::new("Bench")
                        .with_set(SetDraft::new(8, 60.0))
                        .with_set(SetDraft::new(8, 80.0)),
                ),
            )
            .await
            .unwrap();

        let summary = app.dashboard().await.unwrap();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total_volume, 1120.0);
        assert_eq!(summary.most_recent.unwrap().name, "Push Day");

        let records = app.personal_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].set.load, 80.0);
    }

    #[tokio::test]
    async fn services_share_one_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            data_dir: Some(dir.path().join("nested")),
            db_file: "app.db".into(),
            in_memory: false,
        };

        {
            let app = AppState::open(&config).unwrap();
            app.session.register("lucas", "pw", "pw").await.unwrap();
            app.session.login("lucas", "pw").await.unwrap();
        }

        let app = AppState::open(&config).unwrap();
        assert!(app.session.is_authenticated().await.unwrap());
        assert_eq!(app.profile.load().await.unwrap().display_name, "lucas");
    }

    #[test]
    fn missing_data_dir_is_reported() {
        let config = ClientConfig {
            data_dir: None,
            db_file: "app.db".into(),
            in_memory: false,
        };
        assert!(AppState::open(&config).is_err());
    }
}
