use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{RankedError, RankedResult};

/// Relative skill position in [0.0, 1.0].
///
/// Unlike a clamped score, an out-of-range percentile is a caller bug and is
/// rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentile(f64);

impl Percentile {
    pub const MIN: Percentile = Percentile(0.0);
    pub const MAX: Percentile = Percentile(1.0);

    /// Create a percentile, rejecting NaN, infinities, and values outside [0, 1].
    pub fn new(value: f64) -> RankedResult<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RankedError::InvalidPercentile { value })
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Arithmetic mean of a non-empty slice; `None` when empty.
    pub fn mean(values: &[Percentile]) -> Option<Percentile> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().map(|p| p.0).sum();
        // The mean of in-range values is in range; clamp absorbs float error.
        Some(Self((sum / values.len() as f64).clamp(0.0, 1.0)))
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl TryFrom<f64> for Percentile {
    type Error = RankedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentile> for f64 {
    fn from(p: Percentile) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Percentile::new(-0.01).is_err());
        assert!(Percentile::new(1.01).is_err());
        assert!(Percentile::new(f64::NAN).is_err());
        assert!(Percentile::new(f64::INFINITY).is_err());
        assert!(Percentile::new(0.0).is_ok());
        assert!(Percentile::new(1.0).is_ok());
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(Percentile::mean(&[]), None);
    }

    #[test]
    fn mean_averages_values() {
        let values = [Percentile::new(0.2).unwrap(), Percentile::new(0.6).unwrap()];
        let mean = Percentile::mean(&values).unwrap();
        assert!((mean.value() - 0.4).abs() < 1e-12);
    }
}
