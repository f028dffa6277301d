use serde::{Deserialize, Serialize};

use super::Percentile;
use crate::errors::{RankedError, RankedResult};

/// Everything the orchestrator needs to know about one new run.
///
/// Built once at the ingestion boundary. Percentiles are range-checked by
/// [`Percentile`]; [`RunObservation::validate`] covers the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunObservation {
    pub category: String,
    /// Percentile of the run that triggered this update.
    pub last_run_percentile: Percentile,
    /// Recent run percentiles for the category, newest first. Entry 0 is the
    /// triggering run itself.
    pub recent_percentiles: Vec<Percentile>,
    /// Current tier label from the ranking subsystem.
    pub skill_tier: String,
    /// Current overall skill percentile, if the player has one.
    pub skill_percentile: Option<Percentile>,
    /// Distinct tasks played in this category.
    pub distinct_tasks: u32,
}

impl RunObservation {
    /// Build an observation from loosely typed ingestion values, validating
    /// every field.
    pub fn from_raw(
        category: &str,
        last_run_percentile: f64,
        recent_percentiles: &[f64],
        skill_tier: &str,
        skill_percentile: Option<f64>,
        distinct_tasks: i64,
    ) -> RankedResult<Self> {
        let recent = recent_percentiles
            .iter()
            .copied()
            .map(Percentile::new)
            .collect::<RankedResult<Vec<_>>>()?;
        let distinct_tasks = u32::try_from(distinct_tasks).map_err(|_| {
            RankedError::InvalidObservation {
                field: "distinct_tasks".to_string(),
                reason: format!("must be a non-negative count, got {distinct_tasks}"),
            }
        })?;

        let observation = Self {
            category: category.to_string(),
            last_run_percentile: Percentile::new(last_run_percentile)?,
            recent_percentiles: recent,
            skill_tier: skill_tier.to_string(),
            skill_percentile: skill_percentile.map(Percentile::new).transpose()?,
            distinct_tasks,
        };
        observation.validate()?;
        Ok(observation)
    }

    /// Check the fields that the type system does not.
    pub fn validate(&self) -> RankedResult<()> {
        if self.category.trim().is_empty() {
            return Err(RankedError::InvalidObservation {
                field: "category".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.category.trim() != self.category {
            return Err(RankedError::InvalidObservation {
                field: "category".to_string(),
                reason: "must not have leading or trailing whitespace".to_string(),
            });
        }
        Ok(())
    }
}
