mod ranked_error;
mod storage_error;

pub use ranked_error::RankedError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type RankedResult<T> = Result<T, RankedError>;
