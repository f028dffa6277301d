#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use ranked_core::errors::{RankedResult, StorageError};
use ranked_core::models::{CategoryProgress, Percentile, ProgressWrite, RunObservation, TierRange};
use ranked_core::tier::Tier;
use ranked_core::traits::{ICategoryProgressStore, ITierRangeResolver};
use ranked_progress::{ProgressEngine, StaticTierLadder};
use ranked_storage::{InMemoryProgressStore, StorageEngine};

pub fn observation(
    category: &str,
    last_run: f64,
    recent: &[f64],
    tier: &str,
    skill: Option<f64>,
    distinct_tasks: i64,
) -> RunObservation {
    RunObservation::from_raw(category, last_run, recent, tier, skill, distinct_tasks).unwrap()
}

pub fn sqlite_engine() -> (Arc<StorageEngine>, ProgressEngine) {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let engine = ProgressEngine::new(store.clone(), Arc::new(StaticTierLadder::default()));
    (store, engine)
}

/// Delegates to an in-memory store, failing writes for one category.
pub struct FailingStore {
    pub inner: InMemoryProgressStore,
    pub broken_category: String,
}

impl FailingStore {
    pub fn new(broken_category: &str) -> Self {
        Self {
            inner: InMemoryProgressStore::new(),
            broken_category: broken_category.to_string(),
        }
    }

    fn check(&self, category: &str) -> RankedResult<()> {
        if category == self.broken_category {
            return Err(StorageError::SqliteError {
                message: "disk I/O error".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ICategoryProgressStore for FailingStore {
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        self.inner.get(category)
    }

    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool> {
        self.inner.insert_if_absent(defaults)
    }

    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()> {
        self.check(category)?;
        self.inner.update(category, write)
    }

    fn compare_and_update(
        &self,
        category: &str,
        expected_runs_count: u64,
        write: &ProgressWrite,
    ) -> RankedResult<bool> {
        self.check(category)?;
        self.inner.compare_and_update(category, expected_runs_count, write)
    }

    fn list(&self) -> RankedResult<Vec<CategoryProgress>> {
        self.inner.list()
    }
}

/// Simulates another process writing the row between the engine's read and
/// its first compare-and-swap.
pub struct RacingStore {
    pub inner: InMemoryProgressStore,
    raced: AtomicBool,
}

impl RacingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryProgressStore::new(),
            raced: AtomicBool::new(false),
        }
    }
}

impl ICategoryProgressStore for RacingStore {
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        self.inner.get(category)
    }

    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool> {
        self.inner.insert_if_absent(defaults)
    }

    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()> {
        self.inner.update(category, write)
    }

    fn compare_and_update(
        &self,
        category: &str,
        expected_runs_count: u64,
        write: &ProgressWrite,
    ) -> RankedResult<bool> {
        if !self.raced.swap(true, Ordering::SeqCst) {
            if let Some(row) = self.inner.get(category)? {
                self.inner.update(
                    category,
                    &ProgressWrite {
                        xp: row.xp + 10,
                        progress_points: row.progress_points,
                        runs_count: row.runs_count + 1,
                        distinct_tasks_count: row.distinct_tasks_count,
                        written_at: Utc::now(),
                    },
                )?;
            }
        }
        self.inner.compare_and_update(category, expected_runs_count, write)
    }

    fn list(&self) -> RankedResult<Vec<CategoryProgress>> {
        self.inner.list()
    }
}

/// Every compare-and-swap loses.
#[derive(Default)]
pub struct AlwaysConflictStore {
    pub inner: InMemoryProgressStore,
    pub attempts: AtomicUsize,
}

impl ICategoryProgressStore for AlwaysConflictStore {
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        self.inner.get(category)
    }

    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool> {
        self.inner.insert_if_absent(defaults)
    }

    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()> {
        self.inner.update(category, write)
    }

    fn compare_and_update(&self, _: &str, _: u64, _: &ProgressWrite) -> RankedResult<bool> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }

    fn list(&self) -> RankedResult<Vec<CategoryProgress>> {
        self.inner.list()
    }
}

/// A ranking subsystem that returns a range whose minimum is above its maximum.
pub struct InvertedLadder;

impl ITierRangeResolver for InvertedLadder {
    fn tier_range_for_percentile(&self, _: Option<Percentile>) -> TierRange {
        TierRange::new(Tier::Gold, 2000, 1000)
    }
}
