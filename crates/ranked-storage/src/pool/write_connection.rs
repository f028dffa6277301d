//! Single write connection behind a mutex. Serialized writes.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use ranked_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use ranked_core::errors::{RankedResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by a mutex.
///
/// Statements are short, so a blocking mutex is held only for the duration
/// of one query.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> RankedResult<Self> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> RankedResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> RankedResult<T>
    where
        F: FnOnce(&Connection) -> RankedResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("write connection: {e}"),
        })?;
        f(&guard)
    }
}
