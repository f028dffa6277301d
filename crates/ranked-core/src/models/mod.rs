mod category_progress;
mod observation;
mod percentile;
mod snapshot;
mod tier_range;

pub use category_progress::{CategoryProgress, ProgressWrite};
pub use observation::RunObservation;
pub use percentile::Percentile;
pub use snapshot::ProgressSnapshot;
pub use tier_range::TierRange;
