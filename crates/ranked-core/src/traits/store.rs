use crate::errors::RankedResult;
use crate::models::{CategoryProgress, ProgressWrite};

/// Persistence boundary for category progress rows, keyed by category name.
///
/// Every method is a separate unit of I/O; the orchestrator is responsible
/// for sequencing them.
pub trait ICategoryProgressStore: Send + Sync {
    /// Fetch a row, or `None` if the category has never been initialized.
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>>;

    /// Insert `defaults` unless a row for `defaults.category` exists.
    /// Returns `true` when a row was inserted.
    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool>;

    /// Unconditionally overwrite the numeric fields and timestamps of a row.
    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()>;

    /// Overwrite a row only if its `runs_count` still equals
    /// `expected_runs_count`. Returns `false` when another writer got there
    /// first and nothing was written.
    fn compare_and_update(
        &self,
        category: &str,
        expected_runs_count: u64,
        write: &ProgressWrite,
    ) -> RankedResult<bool>;

    /// All rows, ordered by category name.
    fn list(&self) -> RankedResult<Vec<CategoryProgress>>;
}
