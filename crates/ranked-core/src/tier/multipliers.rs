use crate::constants::UNKNOWN_TIER_MULTIPLIER;

use super::Tier;

/// XP multiplier per tier. Higher tiers need more runs per XP point.
pub const TIER_TABLE: [(Tier, f64); 9] = [
    (Tier::Bronze, 1.00),
    (Tier::Silver, 0.95),
    (Tier::Gold, 0.90),
    (Tier::Platinum, 0.85),
    (Tier::Diamond, 0.80),
    (Tier::Master, 0.70),
    (Tier::Grandmaster, 0.60),
    (Tier::Champion, 0.50),
    (Tier::Unranked, 1.00),
];

pub(super) fn multiplier(tier: Tier) -> f64 {
    TIER_TABLE
        .iter()
        .find(|(t, _)| *t == tier)
        .map_or(UNKNOWN_TIER_MULTIPLIER, |&(_, m)| m)
}

/// Multiplier for a raw tier label.
/// Unrecognized labels fall back to [`UNKNOWN_TIER_MULTIPLIER`].
pub fn multiplier_for_label(label: &str) -> f64 {
    Tier::parse(label).map_or(UNKNOWN_TIER_MULTIPLIER, Tier::multiplier)
}
