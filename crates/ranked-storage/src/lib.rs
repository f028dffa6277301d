//! # ranked-storage
//!
//! Persistence for category progress rows.
//! - [`StorageEngine`]: SQLite, one serialized writer plus a read pool, schema
//!   versioned with `PRAGMA user_version`.
//! - [`InMemoryProgressStore`]: the same contract over a concurrent map.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;
pub use memory::InMemoryProgressStore;

use ranked_core::errors::{RankedError, StorageError};
use rusqlite::ErrorCode;

/// Wrap a rusqlite failure as a workspace error. Lock contention maps to
/// [`StorageError::Busy`]; everything else is [`StorageError::SqliteError`].
pub(crate) fn to_storage_err(e: rusqlite::Error) -> RankedError {
    let message = e.to_string();
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            StorageError::Busy { message }.into()
        }
        _ => StorageError::SqliteError { message }.into(),
    }
}
