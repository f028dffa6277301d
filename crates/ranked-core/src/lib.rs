//! # ranked-core
//!
//! Foundation crate for ranked category progress.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tier;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RankedConfig;
pub use errors::{RankedError, RankedResult};
pub use models::{
    CategoryProgress, Percentile, ProgressSnapshot, ProgressWrite, RunObservation, TierRange,
};
pub use tier::Tier;
