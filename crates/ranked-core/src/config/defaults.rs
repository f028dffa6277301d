// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "ranked.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Progress ---
pub const DEFAULT_MAX_UPDATE_ATTEMPTS: u32 = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
