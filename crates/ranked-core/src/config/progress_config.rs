use serde::{Deserialize, Serialize};

use super::defaults;

/// Progress update configuration.
///
/// The scoring constants are part of the display contract and are not
/// configurable; see [`crate::constants`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Read-compute-write attempts before an update gives up on a
    /// compare-and-swap conflict.
    pub max_update_attempts: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            max_update_attempts: defaults::DEFAULT_MAX_UPDATE_ATTEMPTS,
        }
    }
}
