//! Published roster snapshot with on-demand refresh.

use std::sync::Arc;

use parking_lot::RwLock;
use roster_core::{RepoResult, RosterSnapshot, SnapshotProvider};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Holds the current snapshot and swaps it atomically on refresh
///
/// Readers get an `Arc` of the published snapshot and are never blocked by a
/// refresh in flight. Refreshes are serialized.
pub struct SnapshotCache {
    provider: Arc<dyn SnapshotProvider>,
    current: RwLock<Arc<RosterSnapshot>>,
    refresh_lock: Mutex<()>,
}

impl SnapshotCache {
    /// Create a cache that starts with no data
    pub fn new(provider: Arc<dyn SnapshotProvider>) -> Self {
        Self {
            provider,
            current: RwLock::new(Arc::new(RosterSnapshot::empty())),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Create a cache and perform the initial fetch
    pub async fn load(provider: Arc<dyn SnapshotProvider>) -> RepoResult<Self> {
        let cache = Self::new(provider);
        cache.refresh().await?;
        Ok(cache)
    }

    /// Currently published snapshot
    pub fn current(&self) -> Arc<RosterSnapshot> {
        self.current.read().clone()
    }

    /// Fetch from the provider and publish the result
    ///
    /// On failure the previously published snapshot stays in place.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RepoResult<Arc<RosterSnapshot>> {
        let _guard = self.refresh_lock.lock().await;

        let snapshot = match self.provider.fetch_snapshot().await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(err) => {
                warn!(error = %err, "Snapshot refresh failed, keeping previous snapshot");
                return Err(err);
            }
        };

        *self.current.write() = Arc::clone(&snapshot);
        info!(members = snapshot.len(), "Snapshot published");
        Ok(snapshot)
    }

    /// Publish a snapshot directly, bypassing the provider
    pub fn publish(&self, snapshot: RosterSnapshot) {
        *self.current.write() = Arc::new(snapshot);
    }
}

impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("members", &self.current.read().len())
            .finish()
    }
}
