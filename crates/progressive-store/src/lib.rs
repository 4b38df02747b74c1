//! # progressive-store
//!
//! Durable on-device storage for the Progressive workout tracker.
//!
//! Every persisted value lives under a fixed string key in a small SQLite
//! table and is always written as a whole.  The crate exposes a blocking
//! [`KeyValueStore`] backend trait (SQLite [`Database`] or in-memory
//! [`MemoryStore`]) and the async [`Gateway`] that the application layer
//! talks to.

pub mod database;
pub mod gateway;
pub mod kv;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use gateway::Gateway;
pub use kv::{KeyValueStore, MemoryStore};
