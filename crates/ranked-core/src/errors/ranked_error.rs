use super::StorageError;

/// Top-level error for every ranked-progress operation.
#[derive(Debug, thiserror::Error)]
pub enum RankedError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("category not found: {category}")]
    CategoryNotFound { category: String },

    #[error("invalid observation field `{field}`: {reason}")]
    InvalidObservation { field: String, reason: String },

    #[error("percentile out of range [0, 1]: {value}")]
    InvalidPercentile { value: f64 },

    #[error("update of category {category} lost {attempts} compare-and-swap races")]
    ConcurrencyConflict { category: String, attempts: u32 },

    #[error("update of category {category} aborted: {reason}")]
    UpdateAborted { category: String, reason: String },

    #[error("invalid tier ladder: {reason}")]
    InvalidTierLadder { reason: String },

    #[error("config error: {0}")]
    ConfigError(String),
}

impl RankedError {
    /// Whether retrying the same update could succeed: a lost
    /// compare-and-swap or a busy/locked database. Other SQLite failures
    /// are permanent.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConcurrencyConflict { .. } | Self::StorageError(StorageError::Busy { .. })
        )
    }
}
