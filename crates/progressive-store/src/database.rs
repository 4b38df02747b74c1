//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.  The connection sits behind
//! a mutex so a single handle can be shared with the blocking worker pool.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Default database file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "progressive.db";

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/progressive/progressive.db`
    /// - macOS:   `~/Library/Application Support/com.progressive.progressive/progressive.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\progressive\progressive\data\progressive.db`
    pub fn new() -> Result<Self> {
        let data_dir = default_data_dir()?;
        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join(DEFAULT_DB_FILE);

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Self::from_connection(conn)
    }

    /// Open a throwaway database that lives only as long as the handle.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock and return the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the key-value helpers, but direct access is
    /// occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("connection lock poisoned: {e}")))
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        let conn = self.conn().ok()?;
        let path = conn.path().map(PathBuf::from);
        path
    }
}

/// Platform data directory for the application.
pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("com", "progressive", "progressive").ok_or(StoreError::NoDataDir)?;
    Ok(project_dirs.data_dir().to_path_buf())
}
