mod store;
mod tier_range;

pub use store::ICategoryProgressStore;
pub use tier_range::ITierRangeResolver;
