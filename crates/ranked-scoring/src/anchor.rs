use ranked_core::constants::{
    ABSENT_SKILL_TARGET_POINTS, ADDITIVE_MULTIPLIER, RUBBERBAND_FACTOR, SKILL_POINT_SCALE,
};
use ranked_core::models::Percentile;

/// Progress-point target implied by the measured skill: `round(p * 3000)`.
/// No skill percentile anchors to [`ABSENT_SKILL_TARGET_POINTS`].
pub fn compute_skill_target_points(skill_percentile: Option<Percentile>) -> u32 {
    match skill_percentile {
        Some(p) => (p.value() * SKILL_POINT_SCALE).round() as u32,
        None => ABSENT_SKILL_TARGET_POINTS,
    }
}

/// Pull toward the target: 5% of the remaining distance. Negative when the
/// current points are above the target.
pub fn rubberband_pull(target_points: u32, current_points: u32) -> f64 {
    (f64::from(target_points) - f64::from(current_points)) * RUBBERBAND_FACTOR
}

/// Points granted directly for XP earned, independent of the anchor.
pub fn additive_gain(xp_gain: u32) -> f64 {
    f64::from(xp_gain) * ADDITIVE_MULTIPLIER
}
