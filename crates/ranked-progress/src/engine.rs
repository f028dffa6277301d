//! ProgressEngine: the single writer of category progress rows.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinSet;
use tracing::Instrument;

use ranked_core::config::{ProgressConfig, RankedConfig};
use ranked_core::errors::{RankedError, RankedResult};
use ranked_core::models::{CategoryProgress, ProgressSnapshot, ProgressWrite, RunObservation};
use ranked_core::tier::Tier;
use ranked_core::traits::{ICategoryProgressStore, ITierRangeResolver};
use ranked_scoring::compute_update;
use ranked_storage::StorageEngine;

use crate::display::ProgressDisplayReader;
use crate::ladder::StaticTierLadder;
use crate::locks::CategoryLocks;
use crate::tracing_setup::events;

/// Applies runs to category rows.
///
/// Updates to the same category are serialized in-process by
/// [`CategoryLocks`] and guarded across processes by a compare-and-swap on
/// `runs_count`, so concurrent runs are never silently dropped. Distinct
/// categories update in parallel.
pub struct ProgressEngine {
    store: Arc<dyn ICategoryProgressStore>,
    tiers: Arc<dyn ITierRangeResolver>,
    locks: CategoryLocks,
    config: ProgressConfig,
}

impl ProgressEngine {
    pub fn new(store: Arc<dyn ICategoryProgressStore>, tiers: Arc<dyn ITierRangeResolver>) -> Self {
        Self::with_config(store, tiers, ProgressConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn ICategoryProgressStore>,
        tiers: Arc<dyn ITierRangeResolver>,
        config: ProgressConfig,
    ) -> Self {
        Self {
            store,
            tiers,
            locks: CategoryLocks::new(),
            config,
        }
    }

    /// Open a SQLite-backed engine at `config.storage.db_path` with the
    /// default tier ladder.
    pub fn open(config: &RankedConfig) -> RankedResult<Self> {
        let store =
            StorageEngine::open_with_config(Path::new(&config.storage.db_path), &config.storage)?;
        Ok(Self::with_config(
            Arc::new(store),
            Arc::new(StaticTierLadder::default()),
            config.progress.clone(),
        ))
    }

    /// Apply one run to its category and return the resulting snapshot.
    ///
    /// Initializes the row on first use, recomputes XP and progress points,
    /// and persists them. A failed store call aborts the update; the row
    /// initialization is not rolled back.
    pub async fn update_category_progress(
        &self,
        observation: &RunObservation,
    ) -> RankedResult<ProgressSnapshot> {
        observation.validate()?;
        let category = observation.category.as_str();

        let result = self
            .apply_serialized(observation)
            .instrument(crate::update_span!(category))
            .await;
        if let Err(e) = &result {
            events::update_failed(category, e);
        }
        result
    }

    /// Apply several runs. Different categories run concurrently; runs for
    /// the same category are applied one at a time, in no guaranteed order.
    /// Results are returned in input order, one per observation.
    pub async fn update_many(
        self: &Arc<Self>,
        observations: Vec<RunObservation>,
    ) -> Vec<RankedResult<ProgressSnapshot>> {
        let categories: Vec<String> = observations.iter().map(|o| o.category.clone()).collect();
        let mut tasks = JoinSet::new();
        for (index, observation) in observations.into_iter().enumerate() {
            let engine = Arc::clone(self);
            tasks.spawn(async move {
                (index, engine.update_category_progress(&observation).await)
            });
        }

        let mut results: Vec<Option<RankedResult<ProgressSnapshot>>> =
            categories.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            if let Ok((index, result)) = joined {
                results[index] = Some(result);
            }
        }

        results
            .into_iter()
            .zip(categories)
            .map(|(result, category)| {
                result.unwrap_or_else(|| {
                    Err(RankedError::UpdateAborted {
                        category,
                        reason: "update task panicked or was cancelled".to_string(),
                    })
                })
            })
            .collect()
    }

    /// Stored progress for a category, initializing the zero row if the
    /// category has never been seen. Repeated calls do not change the row.
    pub fn get_category_progress(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        self.ensure_row(category)?;
        self.store.get(category)
    }

    /// All category rows, ordered by name.
    pub fn list_category_progress(&self) -> RankedResult<Vec<CategoryProgress>> {
        self.store.list()
    }

    /// A read-only view over the same store.
    pub fn display_reader(&self) -> ProgressDisplayReader {
        ProgressDisplayReader::new(Arc::clone(&self.store))
    }

    async fn apply_serialized(
        &self,
        observation: &RunObservation,
    ) -> RankedResult<ProgressSnapshot> {
        let category = observation.category.as_str();
        let _guard = self.locks.lock(category).await;

        if Tier::parse(&observation.skill_tier).is_none() {
            events::unknown_tier(category, &observation.skill_tier);
        }
        let range = self.tiers.tier_range_for_percentile(observation.skill_percentile);
        if !range.is_ordered() {
            return Err(RankedError::InvalidTierLadder {
                reason: format!(
                    "{} range is inverted: {}..{}",
                    range.tier, range.min_points, range.max_points
                ),
            });
        }

        self.ensure_row(category)?;

        let max_attempts = self.config.max_update_attempts.max(1);
        for attempt in 1..=max_attempts {
            let current = self
                .store
                .get(category)?
                .ok_or_else(|| RankedError::CategoryNotFound {
                    category: category.to_string(),
                })?;

            let breakdown = compute_update(&current, observation, &range);
            let write = ProgressWrite {
                xp: breakdown.new_xp,
                progress_points: breakdown.new_progress_points,
                runs_count: current.runs_count + 1,
                distinct_tasks_count: observation.distinct_tasks,
                written_at: Utc::now(),
            };

            if self
                .store
                .compare_and_update(category, current.runs_count, &write)?
            {
                events::progress_updated(category, write.runs_count, &breakdown);
                return Ok(ProgressSnapshot::new(
                    breakdown.new_xp,
                    breakdown.xp_gain,
                    breakdown.new_progress_points,
                    &observation.skill_tier,
                ));
            }

            events::update_conflict(category, attempt, current.runs_count);
            tokio::task::yield_now().await;
        }

        Err(RankedError::ConcurrencyConflict {
            category: category.to_string(),
            attempts: max_attempts,
        })
    }

    fn ensure_row(&self, category: &str) -> RankedResult<()> {
        if self
            .store
            .insert_if_absent(&CategoryProgress::initialized(category, Utc::now()))?
        {
            events::category_initialized(category);
        }
        Ok(())
    }
}
