pub mod defaults;
mod observability_config;
mod progress_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RankedError, RankedResult};

pub use observability_config::ObservabilityConfig;
pub use progress_config::ProgressConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration, one section per subsystem.
/// Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedConfig {
    pub storage: StorageConfig,
    pub progress: ProgressConfig,
    pub observability: ObservabilityConfig,
}

impl RankedConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> RankedResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RankedError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML file.
    pub fn from_file(path: &Path) -> RankedResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RankedError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    fn validate(&self) -> RankedResult<()> {
        if self.progress.max_update_attempts == 0 {
            return Err(RankedError::ConfigError(
                "progress.max_update_attempts must be at least 1".to_string(),
            ));
        }
        if self.storage.read_pool_size == 0 {
            return Err(RankedError::ConfigError(
                "storage.read_pool_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
