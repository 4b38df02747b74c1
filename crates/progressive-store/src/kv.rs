//! String-keyed value storage.
//!
//! [`KeyValueStore`] is the seam between the gateway and the physical
//! backend.  Every write replaces the whole value under a key; there is no
//! partial update or merge.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{Result, StoreError};

/// Blocking key-value backend.
///
/// Implementations must be shareable across threads: the gateway runs each
/// call on the Tokio blocking pool.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`.  Returns `true` if a value was removed.
    fn remove(&self, key: &str) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn()?
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn()?.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()?
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Volatile backend, mainly for tests and throwaway sessions.
///
/// It can be switched offline to exercise the "storage unavailable" paths.
#[derive(Debug)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    online: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    /// Simulate the device storage becoming (un)reachable.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        self.values
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("memory store lock poisoned: {e}")))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.values()?.remove(key).is_some())
    }
}
