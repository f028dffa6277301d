//! CategoryLocks: one async mutex per category name.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serializes work per category while letting distinct categories proceed
/// in parallel. Category names are a small fixed set, so entries are never
/// evicted.
#[derive(Default)]
pub struct CategoryLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl CategoryLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `category`. Released when the guard drops.
    pub async fn lock(&self, category: &str) -> OwnedMutexGuard<()> {
        // Clone the Arc out so no map shard lock is held across the await.
        let lock = self
            .locks
            .entry(category.to_string())
            .or_default()
            .value()
            .clone();
        lock.lock_owned().await
    }

    /// Number of categories that have been locked at least once.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
