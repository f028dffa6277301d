use serde::{Deserialize, Serialize};

use super::CategoryProgress;
use crate::constants::{OVERFLOW_MAX, XP_MAX};

/// Display-ready progress for one category.
///
/// Field names are serialized in camelCase because UI consumers key on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub xp: u32,
    pub xp_max: u32,
    pub overflow_max: u32,
    /// XP gained by the run that produced this snapshot; 0 for pure reads.
    pub xp_gain_last_run: u32,
    pub progress_points: u32,
    /// Tier label supplied by the caller, echoed for display.
    pub progress_tier_display: String,
    pub is_overflow: bool,
}

impl ProgressSnapshot {
    pub fn new(xp: u32, xp_gain_last_run: u32, progress_points: u32, tier_label: &str) -> Self {
        Self {
            xp,
            xp_max: XP_MAX,
            overflow_max: OVERFLOW_MAX,
            xp_gain_last_run,
            progress_points,
            progress_tier_display: tier_label.to_string(),
            is_overflow: xp > XP_MAX,
        }
    }

    /// Snapshot of a category that has never been updated.
    pub fn initialized(tier_label: &str) -> Self {
        Self::new(0, 0, 0, tier_label)
    }

    /// Snapshot of a stored row with no run processed.
    pub fn from_row(row: &CategoryProgress, tier_label: &str) -> Self {
        Self::new(row.xp, 0, row.progress_points, tier_label)
    }
}
