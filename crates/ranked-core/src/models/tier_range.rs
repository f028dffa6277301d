use serde::{Deserialize, Serialize};

use crate::constants::OVERFLOW_ALLOWANCE;
use crate::tier::Tier;

/// Numeric progress-point range of a tier, as resolved by the ranking subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRange {
    pub tier: Tier,
    pub min_points: u32,
    pub max_points: u32,
}

impl TierRange {
    pub fn new(tier: Tier, min_points: u32, max_points: u32) -> Self {
        Self {
            tier,
            min_points,
            max_points,
        }
    }

    /// Highest allowed progress-point value: the nominal maximum plus overflow.
    pub fn ceiling(&self) -> u32 {
        self.max_points.saturating_add(OVERFLOW_ALLOWANCE)
    }

    /// Whether `min_points <= max_points`. Ranges come from an external
    /// resolver and must be checked before [`TierRange::clamp`].
    pub fn is_ordered(&self) -> bool {
        self.min_points <= self.max_points
    }

    /// Clamp a raw progress-point value into `[min_points, ceiling]`.
    /// Panics if the range is not ordered.
    pub fn clamp(&self, points: f64) -> f64 {
        points.clamp(f64::from(self.min_points), f64::from(self.ceiling()))
    }

    /// Whether `points` lies inside `[min_points, ceiling]`.
    pub fn contains(&self, points: u32) -> bool {
        (self.min_points..=self.ceiling()).contains(&points)
    }
}
