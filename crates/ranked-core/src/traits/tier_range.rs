use crate::models::{Percentile, TierRange};

/// Maps a skill percentile to its tier and progress-point range.
///
/// Implemented by the ranking subsystem. The percentile, not the tier label,
/// is authoritative for range resolution.
pub trait ITierRangeResolver: Send + Sync {
    fn tier_range_for_percentile(&self, percentile: Option<Percentile>) -> TierRange;
}
