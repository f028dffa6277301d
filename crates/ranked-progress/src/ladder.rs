//! StaticTierLadder: a fixed percentile-to-tier-range mapping.
//!
//! Default stand-in for the ranking subsystem's percentile-to-range lookup.

use ranked_core::errors::{RankedError, RankedResult};
use ranked_core::models::{Percentile, TierRange};
use ranked_core::tier::Tier;
use ranked_core::traits::ITierRangeResolver;
use ranked_scoring::compute_skill_target_points;

/// Width of each band in the default ladder: 3000 points over eight tiers.
const DEFAULT_BAND_WIDTH: u32 = 375;

/// Contiguous, ascending tier bands over the skill point scale.
///
/// A percentile is projected onto points the same way as the skill target,
/// so the target always falls inside the resolved range.
#[derive(Debug, Clone)]
pub struct StaticTierLadder {
    bands: Vec<TierRange>,
}

impl StaticTierLadder {
    /// Build a ladder from bands ordered lowest first.
    pub fn new(bands: Vec<TierRange>) -> RankedResult<Self> {
        let invalid = |reason: String| RankedError::InvalidTierLadder { reason };

        if bands.is_empty() {
            return Err(invalid("at least one band is required".to_string()));
        }
        for band in &bands {
            if band.min_points >= band.max_points {
                return Err(invalid(format!(
                    "{} band is empty: {}..{}",
                    band.tier, band.min_points, band.max_points
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[1].min_points != pair[0].max_points {
                return Err(invalid(format!(
                    "{} does not start where {} ends ({} != {})",
                    pair[1].tier, pair[0].tier, pair[1].min_points, pair[0].max_points
                )));
            }
        }
        Ok(Self { bands })
    }

    /// The bands, lowest first.
    pub fn bands(&self) -> &[TierRange] {
        &self.bands
    }

    fn lowest(&self) -> TierRange {
        // `new` rejects empty ladders.
        self.bands[0]
    }
}

impl Default for StaticTierLadder {
    /// Eight equal bands, Bronze through Champion, over 0..3000 points.
    fn default() -> Self {
        let ranked = [
            Tier::Bronze,
            Tier::Silver,
            Tier::Gold,
            Tier::Platinum,
            Tier::Diamond,
            Tier::Master,
            Tier::Grandmaster,
            Tier::Champion,
        ];
        let bands = ranked
            .iter()
            .zip(0u32..)
            .map(|(&tier, i)| {
                TierRange::new(tier, i * DEFAULT_BAND_WIDTH, (i + 1) * DEFAULT_BAND_WIDTH)
            })
            .collect();
        Self { bands }
    }
}

impl ITierRangeResolver for StaticTierLadder {
    fn tier_range_for_percentile(&self, percentile: Option<Percentile>) -> TierRange {
        let Some(p) = percentile else {
            let lowest = self.lowest();
            return TierRange::new(Tier::Unranked, lowest.min_points, lowest.max_points);
        };
        let points = compute_skill_target_points(Some(p));
        self.bands
            .iter()
            .rev()
            .find(|band| points >= band.min_points)
            .copied()
            .unwrap_or_else(|| self.lowest())
    }
}
