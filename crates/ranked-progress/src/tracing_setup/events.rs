//! Structured log events for progress operations.

use ranked_core::errors::RankedError;
use ranked_scoring::ProgressBreakdown;

/// A category row was created on first use.
pub fn category_initialized(category: &str) {
    tracing::info!(
        event = "category_initialized",
        category = %category,
        "category initialized"
    );
}

/// A run was applied to a category.
pub fn progress_updated(category: &str, runs_count: u64, breakdown: &ProgressBreakdown) {
    tracing::debug!(
        event = "progress_updated",
        category = %category,
        runs_count = runs_count,
        baseline = breakdown.baseline.value(),
        xp_gain = breakdown.xp_gain,
        xp = breakdown.new_xp,
        skill_target_points = breakdown.skill_target_points,
        rubberband = breakdown.rubberband,
        additive_gain = breakdown.additive_gain,
        tier = %breakdown.range.tier,
        progress_points = breakdown.new_progress_points,
        "progress updated"
    );
}

/// Tier label not in the multiplier table; the fallback multiplier was used.
pub fn unknown_tier(category: &str, label: &str) {
    tracing::warn!(
        event = "unknown_tier",
        category = %category,
        label = %label,
        "unrecognized tier label, using fallback multiplier"
    );
}

/// A compare-and-swap write lost to another writer.
pub fn update_conflict(category: &str, attempt: u32, expected_runs_count: u64) {
    tracing::warn!(
        event = "update_conflict",
        category = %category,
        attempt = attempt,
        expected_runs_count = expected_runs_count,
        "concurrent write detected, retrying"
    );
}

/// An update failed and was abandoned.
pub fn update_failed(category: &str, error: &RankedError) {
    tracing::error!(
        event = "update_failed",
        category = %category,
        error = %error,
        "progress update failed"
    );
}
