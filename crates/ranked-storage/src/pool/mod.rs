//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;
use std::sync::Arc;

use ranked_core::errors::RankedResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and, for file-backed databases, the
/// read connection pool.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    /// `None` in memory: separate in-memory connections never share rows.
    pub readers: Option<Arc<ReadPool>>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    /// The writer is opened first so the file exists before readers attach.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> RankedResult<Self> {
        let writer = Arc::new(WriteConnection::open(path, busy_timeout_ms)?);
        let readers = Arc::new(ReadPool::open(path, read_pool_size, busy_timeout_ms)?);
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    /// Open an in-memory pool (for testing). All reads go through the writer.
    pub fn open_in_memory() -> RankedResult<Self> {
        Ok(Self {
            writer: Arc::new(WriteConnection::open_in_memory()?),
            readers: None,
        })
    }
}
