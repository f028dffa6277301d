//! # ranked-scoring
//!
//! Pure calculators behind category progress. No I/O, no state.
//! - [`xp`]: per-run XP gain from improvement over a recent baseline, scaled by tier.
//! - [`anchor`]: the skill-derived target that progress points are pulled toward.
//! - [`formula`]: one full update of a category row, with a factor breakdown.

pub mod anchor;
pub mod formula;
pub mod xp;

pub use anchor::compute_skill_target_points;
pub use formula::{compute_update, ProgressBreakdown};
pub use xp::{compute_run_xp_gain, resolve_baseline};
