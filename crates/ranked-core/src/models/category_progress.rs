use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::XP_MAX;

/// Persisted progress for one category. One row per category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Identity key. Immutable after creation.
    pub category: String,
    /// Always within `0..=OVERFLOW_MAX`.
    pub xp: u32,
    /// Within the tier range that was current at the last update, plus overflow.
    pub progress_points: u32,
    /// Incremented by exactly one per successful update.
    pub runs_count: u64,
    /// Overwritten with the caller-supplied count on every update.
    pub distinct_tasks_count: u32,
    pub last_updated_at: DateTime<Utc>,
    /// `None` until the first update.
    pub last_run_at: Option<DateTime<Utc>>,
}

impl CategoryProgress {
    /// The zero row inserted the first time a category is seen.
    pub fn initialized(category: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            category: category.into(),
            xp: 0,
            progress_points: 0,
            runs_count: 0,
            distinct_tasks_count: 0,
            last_updated_at: now,
            last_run_at: None,
        }
    }

    /// Whether XP has passed the nominal maximum.
    pub fn is_overflow(&self) -> bool {
        self.xp > XP_MAX
    }

    /// The row as it reads after `write` is applied.
    pub fn with_write(&self, write: &ProgressWrite) -> Self {
        Self {
            category: self.category.clone(),
            xp: write.xp,
            progress_points: write.progress_points,
            runs_count: write.runs_count,
            distinct_tasks_count: write.distinct_tasks_count,
            last_updated_at: write.written_at,
            last_run_at: Some(write.written_at),
        }
    }
}

/// The numeric fields written back to a category row after a run.
/// `written_at` sets both `last_updated_at` and `last_run_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressWrite {
    pub xp: u32,
    pub progress_points: u32,
    pub runs_count: u64,
    pub distinct_tasks_count: u32,
    pub written_at: DateTime<Utc>,
}
