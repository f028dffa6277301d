//! Fixed constants of the progress contract.
//!
//! These values are shared with every consumer of the progress snapshot and
//! must not drift between releases.

/// Nominal XP ceiling shown on the progress bar.
pub const XP_MAX: u32 = 1000;

/// Hard XP ceiling. XP between `XP_MAX` and this value is overflow.
pub const OVERFLOW_MAX: u32 = 1200;

/// Progress points allowed above the current tier's nominal maximum.
pub const OVERFLOW_ALLOWANCE: u32 = 60;

/// Fraction of the remaining distance to the skill target closed per update.
pub const RUBBERBAND_FACTOR: f64 = 0.05;

/// Progress points granted per XP point gained.
pub const ADDITIVE_MULTIPLIER: f64 = 2.0;

/// Lower bound of the per-run improvement bonus.
pub const IMPROVEMENT_BONUS_MIN: f64 = -5.0;

/// Upper bound of the per-run improvement bonus.
pub const IMPROVEMENT_BONUS_MAX: f64 = 20.0;

/// Flat XP reward for any completed run.
pub const BASE_XP: f64 = 4.0;

/// Minimum XP awarded for a run, even on a regression.
pub const MIN_XP_GAIN: u32 = 1;

/// Number of older runs (after the newest) averaged into the baseline.
pub const BASELINE_HISTORY_WINDOW: usize = 10;

/// Progress-point scale the skill percentile is projected onto.
pub const SKILL_POINT_SCALE: f64 = 3000.0;

// --- Fallback policies ---

/// Multiplier applied when a tier label is not in the tier table.
pub const UNKNOWN_TIER_MULTIPLIER: f64 = 1.00;

/// Skill target used when no skill percentile is known.
pub const ABSENT_SKILL_TARGET_POINTS: u32 = 0;
