//! v001: category_progress: one row per category name.

use rusqlite::Connection;

use ranked_core::errors::RankedResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RankedResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS category_progress (
            category              TEXT PRIMARY KEY,
            xp                    INTEGER NOT NULL DEFAULT 0 CHECK (xp >= 0),
            progress_points       INTEGER NOT NULL DEFAULT 0 CHECK (progress_points >= 0),
            runs_count            INTEGER NOT NULL DEFAULT 0 CHECK (runs_count >= 0),
            distinct_tasks_count  INTEGER NOT NULL DEFAULT 0 CHECK (distinct_tasks_count >= 0),
            last_updated_at       TEXT NOT NULL,
            last_run_at           TEXT
        );
        ",
    )
    .map_err(to_storage_err)?;
    Ok(())
}
