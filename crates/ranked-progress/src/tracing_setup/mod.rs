//! Tracing setup: structured logging with span helpers and event types.

pub mod events;

use ranked_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "RANKED_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `RANKED_LOG`, defaulting to `info`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter)
}

/// Initialize tracing from config. `RANKED_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .try_init()
        .is_ok()
}

/// Span for one progress update.
#[macro_export]
macro_rules! update_span {
    ($category:expr) => {
        tracing::info_span!("progress.update", category = %$category)
    };
}
