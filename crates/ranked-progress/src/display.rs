//! ProgressDisplayReader: snapshots for UI consumption. Never writes.

use std::sync::Arc;

use ranked_core::errors::RankedResult;
use ranked_core::models::ProgressSnapshot;
use ranked_core::traits::ICategoryProgressStore;

/// Builds display snapshots from stored rows. Reports zero XP gain because
/// no run is processed by a read.
pub struct ProgressDisplayReader {
    store: Arc<dyn ICategoryProgressStore>,
}

impl ProgressDisplayReader {
    pub fn new(store: Arc<dyn ICategoryProgressStore>) -> Self {
        Self { store }
    }

    /// Snapshot for one category. A category with no row yet reads as the
    /// zero snapshot; the row is not created.
    pub fn get_progress_display_data(
        &self,
        category: &str,
        skill_tier: &str,
    ) -> RankedResult<ProgressSnapshot> {
        Ok(match self.store.get(category)? {
            Some(row) => ProgressSnapshot::from_row(&row, skill_tier),
            None => ProgressSnapshot::initialized(skill_tier),
        })
    }

    /// Snapshots for `(category, tier label)` pairs, in the same order.
    pub fn get_all_display_data(
        &self,
        requests: &[(&str, &str)],
    ) -> RankedResult<Vec<ProgressSnapshot>> {
        requests
            .iter()
            .map(|(category, tier)| self.get_progress_display_data(category, tier))
            .collect()
    }
}
