//! InMemoryProgressStore: the store contract over a `DashMap`.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use ranked_core::errors::{RankedError, RankedResult};
use ranked_core::models::{CategoryProgress, ProgressWrite};
use ranked_core::traits::ICategoryProgressStore;

/// Process-local store. Each operation is atomic per key; nothing persists.
#[derive(Default)]
pub struct InMemoryProgressStore {
    rows: DashMap<String, CategoryProgress>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ICategoryProgressStore for InMemoryProgressStore {
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        Ok(self.rows.get(category).map(|r| r.clone()))
    }

    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool> {
        match self.rows.entry(defaults.category.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(defaults.clone());
                Ok(true)
            }
        }
    }

    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()> {
        let mut row = self
            .rows
            .get_mut(category)
            .ok_or_else(|| RankedError::CategoryNotFound {
                category: category.to_string(),
            })?;
        *row = row.with_write(write);
        Ok(())
    }

    fn compare_and_update(
        &self,
        category: &str,
        expected_runs_count: u64,
        write: &ProgressWrite,
    ) -> RankedResult<bool> {
        let mut row = self
            .rows
            .get_mut(category)
            .ok_or_else(|| RankedError::CategoryNotFound {
                category: category.to_string(),
            })?;
        if row.runs_count != expected_runs_count {
            return Ok(false);
        }
        *row = row.with_write(write);
        Ok(true)
    }

    fn list(&self) -> RankedResult<Vec<CategoryProgress>> {
        let mut rows: Vec<CategoryProgress> = self.rows.iter().map(|r| r.value().clone()).collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(rows)
    }
}
