//! # ranked-progress
//!
//! Turns a stream of per-run percentiles into persistent XP and progress
//! points per category. [`ProgressEngine`] is the only writer of category
//! rows; [`ProgressDisplayReader`] builds snapshots without mutating them.

pub mod display;
pub mod engine;
pub mod ladder;
pub mod locks;
pub mod tracing_setup;

pub use display::ProgressDisplayReader;
pub use engine::ProgressEngine;
pub use ladder::StaticTierLadder;
pub use locks::CategoryLocks;
