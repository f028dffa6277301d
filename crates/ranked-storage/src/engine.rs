//! StorageEngine: owns the ConnectionPool, runs migrations at startup, and
//! implements ICategoryProgressStore over SQLite.

use std::path::Path;

use ranked_core::config::StorageConfig;
use ranked_core::errors::RankedResult;
use ranked_core::models::{CategoryProgress, ProgressWrite};
use ranked_core::traits::ICategoryProgressStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::category_ops;

/// SQLite-backed category progress store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> RankedResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the pool size and busy timeout from `config`.
    /// `config.db_path` is ignored in favor of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> RankedResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> RankedResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> RankedResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_reader<F, T>(&self, f: F) -> RankedResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> RankedResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl ICategoryProgressStore for StorageEngine {
    fn get(&self, category: &str) -> RankedResult<Option<CategoryProgress>> {
        self.with_reader(|conn| category_ops::get_progress(conn, category))
    }

    fn insert_if_absent(&self, defaults: &CategoryProgress) -> RankedResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| category_ops::insert_if_absent(conn, defaults))
    }

    fn update(&self, category: &str, write: &ProgressWrite) -> RankedResult<()> {
        self.pool
            .writer
            .with_conn(|conn| category_ops::update_progress(conn, category, write))
    }

    fn compare_and_update(
        &self,
        category: &str,
        expected_runs_count: u64,
        write: &ProgressWrite,
    ) -> RankedResult<bool> {
        self.pool.writer.with_conn(|conn| {
            category_ops::compare_and_update(conn, category, expected_runs_count, write)
        })
    }

    fn list(&self) -> RankedResult<Vec<CategoryProgress>> {
        self.with_reader(category_ops::list_progress)
    }
}
