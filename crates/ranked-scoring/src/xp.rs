use ranked_core::constants::{
    BASELINE_HISTORY_WINDOW, BASE_XP, IMPROVEMENT_BONUS_MAX, IMPROVEMENT_BONUS_MIN, MIN_XP_GAIN,
};
use ranked_core::models::Percentile;
use ranked_core::tier::multiplier_for_label;

/// XP earned by one run.
///
/// ```text
/// improve = clamp((pNow - pBase) * 100, -5, 20)
/// xpGain  = max(1, round((4 + improve) * tierMultiplier))
/// ```
///
/// Unrecognized tier labels use the fallback multiplier.
pub fn compute_run_xp_gain(p_now: Percentile, p_base: Percentile, tier_label: &str) -> u32 {
    let raw = (BASE_XP + improvement_bonus(p_now, p_base)) * multiplier_for_label(tier_label);
    let rounded = raw.round();
    if rounded < f64::from(MIN_XP_GAIN) {
        MIN_XP_GAIN
    } else {
        rounded as u32
    }
}

/// Improvement over the baseline in percentage points, clamped to the bonus band.
pub fn improvement_bonus(p_now: Percentile, p_base: Percentile) -> f64 {
    let delta_pct = (p_now.value() - p_base.value()) * 100.0;
    delta_pct.clamp(IMPROVEMENT_BONUS_MIN, IMPROVEMENT_BONUS_MAX)
}

/// Baseline percentile for a run.
///
/// `recent` is newest first and entry 0 is the run being scored, so the
/// baseline averages entries `1..=10`. With no older runs the baseline is the
/// run itself, which yields no improvement bonus.
pub fn resolve_baseline(p_now: Percentile, recent: &[Percentile]) -> Percentile {
    let older = &recent[1.min(recent.len())..];
    let window = &older[..BASELINE_HISTORY_WINDOW.min(older.len())];
    Percentile::mean(window).unwrap_or(p_now)
}
