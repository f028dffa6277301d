use ranked_core::constants::OVERFLOW_MAX;
use ranked_core::models::{CategoryProgress, Percentile, RunObservation, TierRange};

use crate::anchor::{self, compute_skill_target_points};
use crate::xp::{compute_run_xp_gain, resolve_baseline};

/// One category update, factor by factor.
///
/// ```text
/// newXp     = min(xp + xpGain, 1200)
/// target    = round(skillPercentile * 3000)
/// pull      = (target - points) * 0.05
/// additive  = xpGain * 2
/// newPoints = round(clamp(points + pull + additive, tierMin, tierMax + 60))
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBreakdown {
    pub baseline: Percentile,
    pub xp_gain: u32,
    pub new_xp: u32,
    pub skill_target_points: u32,
    pub rubberband: f64,
    pub additive_gain: f64,
    /// Points before clamping to the tier range.
    pub unclamped_points: f64,
    pub range: TierRange,
    pub new_progress_points: u32,
}

/// Compute the next state of `current` for the run described by `observation`.
///
/// `range` must come from the observation's skill percentile; it is evaluated
/// per update and never cached on the row.
pub fn compute_update(
    current: &CategoryProgress,
    observation: &RunObservation,
    range: &TierRange,
) -> ProgressBreakdown {
    let baseline = resolve_baseline(
        observation.last_run_percentile,
        &observation.recent_percentiles,
    );
    let xp_gain = compute_run_xp_gain(
        observation.last_run_percentile,
        baseline,
        &observation.skill_tier,
    );
    let new_xp = current.xp.saturating_add(xp_gain).min(OVERFLOW_MAX);

    let skill_target_points = compute_skill_target_points(observation.skill_percentile);
    let rubberband = anchor::rubberband_pull(skill_target_points, current.progress_points);
    let additive_gain = anchor::additive_gain(xp_gain);
    let unclamped_points = f64::from(current.progress_points) + rubberband + additive_gain;
    // Bounds are integers, so rounding after the clamp stays in range.
    let new_progress_points = range.clamp(unclamped_points).round() as u32;

    ProgressBreakdown {
        baseline,
        xp_gain,
        new_xp,
        skill_target_points,
        rubberband,
        additive_gain,
        unclamped_points,
        range: *range,
        new_progress_points,
    }
}
