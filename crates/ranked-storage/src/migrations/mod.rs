//! Schema migrations using PRAGMA user_version.

pub mod v001_category_progress;

use rusqlite::Connection;

use ranked_core::errors::{RankedResult, StorageError};

use crate::to_storage_err;

/// Schema version after all migrations have run.
pub const LATEST_VERSION: u32 = 1;

type Migration = fn(&Connection) -> RankedResult<()>;

const MIGRATIONS: [(u32, Migration); LATEST_VERSION as usize] =
    [(1, v001_category_progress::migrate)];

/// Run all pending migrations, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> RankedResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if current >= version {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| migration_failed(version, e.to_string()))?;
        migrate(&tx).map_err(|e| migration_failed(version, e.to_string()))?;
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| migration_failed(version, e.to_string()))?;
        tx.commit()
            .map_err(|e| migration_failed(version, e.to_string()))?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> RankedResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}

fn migration_failed(version: u32, reason: String) -> StorageError {
    StorageError::MigrationFailed { version, reason }
}
