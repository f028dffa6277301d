//! Get, insert-if-absent, update, compare-and-update, and list for category rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use ranked_core::errors::{RankedError, RankedResult, StorageError};
use ranked_core::models::{CategoryProgress, ProgressWrite};

use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT category, xp, progress_points, runs_count,
        distinct_tasks_count, last_updated_at, last_run_at
     FROM category_progress";

/// Fetch one row by category name.
pub fn get_progress(conn: &Connection, category: &str) -> RankedResult<Option<CategoryProgress>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE category = ?1"))
        .map_err(to_storage_err)?;

    let raw = stmt
        .query_row(params![category], RawRow::read)
        .optional()
        .map_err(to_storage_err)?;

    raw.map(RawRow::into_progress).transpose()
}

/// Insert the zero row unless the category already exists.
/// Returns `true` when a row was inserted.
pub fn insert_if_absent(conn: &Connection, defaults: &CategoryProgress) -> RankedResult<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO category_progress (
                category, xp, progress_points, runs_count, distinct_tasks_count,
                last_updated_at, last_run_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                defaults.category,
                defaults.xp,
                defaults.progress_points,
                sql_count(defaults.runs_count)?,
                defaults.distinct_tasks_count,
                defaults.last_updated_at.to_rfc3339(),
                defaults.last_run_at.map(|t| t.to_rfc3339()),
            ],
        )
        .map_err(to_storage_err)?;
    Ok(changed == 1)
}

/// Overwrite the numeric fields and timestamps of an existing row.
pub fn update_progress(
    conn: &Connection,
    category: &str,
    write: &ProgressWrite,
) -> RankedResult<()> {
    let written_at = write.written_at.to_rfc3339();
    let changed = conn
        .execute(
            "UPDATE category_progress
             SET xp = ?2, progress_points = ?3, runs_count = ?4,
                 distinct_tasks_count = ?5, last_updated_at = ?6, last_run_at = ?6
             WHERE category = ?1",
            params![
                category,
                write.xp,
                write.progress_points,
                sql_count(write.runs_count)?,
                write.distinct_tasks_count,
                written_at,
            ],
        )
        .map_err(to_storage_err)?;

    if changed == 0 {
        return Err(RankedError::CategoryNotFound {
            category: category.to_string(),
        });
    }
    Ok(())
}

/// Overwrite a row only if `runs_count` still equals `expected_runs_count`.
///
/// Returns `false` on a lost race. A missing row is an error, not a race.
pub fn compare_and_update(
    conn: &Connection,
    category: &str,
    expected_runs_count: u64,
    write: &ProgressWrite,
) -> RankedResult<bool> {
    let written_at = write.written_at.to_rfc3339();
    let changed = conn
        .execute(
            "UPDATE category_progress
             SET xp = ?3, progress_points = ?4, runs_count = ?5,
                 distinct_tasks_count = ?6, last_updated_at = ?7, last_run_at = ?7
             WHERE category = ?1 AND runs_count = ?2",
            params![
                category,
                sql_count(expected_runs_count)?,
                write.xp,
                write.progress_points,
                sql_count(write.runs_count)?,
                write.distinct_tasks_count,
                written_at,
            ],
        )
        .map_err(to_storage_err)?;

    if changed == 1 {
        return Ok(true);
    }
    if get_progress(conn, category)?.is_none() {
        return Err(RankedError::CategoryNotFound {
            category: category.to_string(),
        });
    }
    Ok(false)
}

/// All rows ordered by category name.
pub fn list_progress(conn: &Connection) -> RankedResult<Vec<CategoryProgress>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY category"))
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], RawRow::read)
        .map_err(to_storage_err)?;

    rows.map(|row| {
        row.map_err(to_storage_err).and_then(RawRow::into_progress)
    })
    .collect()
}

/// SQLite integers are signed 64-bit.
fn sql_count(count: u64) -> RankedResult<i64> {
    i64::try_from(count).map_err(|_| {
        StorageError::SqliteError {
            message: format!("runs_count {count} exceeds i64"),
        }
        .into()
    })
}

/// Columns as SQLite stores them, before range and format checks.
struct RawRow {
    category: String,
    xp: i64,
    progress_points: i64,
    runs_count: i64,
    distinct_tasks_count: i64,
    last_updated_at: String,
    last_run_at: Option<String>,
}

impl RawRow {
    fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            category: row.get(0)?,
            xp: row.get(1)?,
            progress_points: row.get(2)?,
            runs_count: row.get(3)?,
            distinct_tasks_count: row.get(4)?,
            last_updated_at: row.get(5)?,
            last_run_at: row.get(6)?,
        })
    }

    fn into_progress(self) -> RankedResult<CategoryProgress> {
        let category = self.category;
        let corrupt = |reason: String| -> RankedError {
            StorageError::CorruptRow {
                category: category.clone(),
                reason,
            }
            .into()
        };
        let parse_time = |s: &str| -> RankedResult<DateTime<Utc>> {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| corrupt(format!("parse datetime '{s}': {e}")))
        };

        let xp = u32::try_from(self.xp).map_err(|_| corrupt(format!("xp {}", self.xp)))?;
        let progress_points = u32::try_from(self.progress_points)
            .map_err(|_| corrupt(format!("progress_points {}", self.progress_points)))?;
        let runs_count = u64::try_from(self.runs_count)
            .map_err(|_| corrupt(format!("runs_count {}", self.runs_count)))?;
        let distinct_tasks_count = u32::try_from(self.distinct_tasks_count)
            .map_err(|_| corrupt(format!("distinct_tasks_count {}", self.distinct_tasks_count)))?;
        let last_updated_at = parse_time(&self.last_updated_at)?;
        let last_run_at = self.last_run_at.as_deref().map(parse_time).transpose()?;

        Ok(CategoryProgress {
            category,
            xp,
            progress_points,
            runs_count,
            distinct_tasks_count,
            last_updated_at,
            last_run_at,
        })
    }
}
