//! Service context - dependency container for services
//!
//! Holds the configured engine, the published snapshot and the roster store.

use std::sync::Arc;

use roster_cache::SnapshotCache;
use roster_common::EngineConfig;
use roster_core::{RosterRepository, SnapshotProvider};

use super::assignment_store::RosterAssignmentStore;
use super::error::{ServiceError, ServiceResult};
use crate::engine::RosterEngine;

/// Service context containing all dependencies
///
/// Cheap to clone; every handler gets its own copy.
#[derive(Clone)]
pub struct ServiceContext {
    engine: Arc<RosterEngine>,
    snapshots: Arc<SnapshotCache>,
    roster: Arc<RosterAssignmentStore>,
}

impl ServiceContext {
    pub fn new(
        engine: Arc<RosterEngine>,
        snapshots: Arc<SnapshotCache>,
        roster: Arc<RosterAssignmentStore>,
    ) -> Self {
        Self {
            engine,
            snapshots,
            roster,
        }
    }

    /// Get the configured roster engine
    pub fn engine(&self) -> &RosterEngine {
        self.engine.as_ref()
    }

    /// Get the snapshot cache
    pub fn snapshots(&self) -> &SnapshotCache {
        self.snapshots.as_ref()
    }

    /// Get the roster assignment store
    pub fn roster(&self) -> &RosterAssignmentStore {
        self.roster.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("snapshots", &self.snapshots)
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    engine_config: Option<EngineConfig>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    snapshot_provider: Option<Arc<dyn SnapshotProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = Some(config);
        self
    }

    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    pub fn snapshot_provider(mut self, provider: Arc<dyn SnapshotProvider>) -> Self {
        self.snapshot_provider = Some(provider);
        self
    }

    /// Build the ServiceContext, loading persisted roster state and the
    /// initial snapshot
    ///
    /// A failing initial snapshot fetch is not fatal: the context starts with
    /// an empty snapshot and can be refreshed later.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing,
    /// or the repository error if persisted roster state cannot be read
    pub async fn build(self) -> ServiceResult<ServiceContext> {
        let repo = self
            .roster_repo
            .ok_or_else(|| ServiceError::validation("roster_repo is required"))?;
        let provider = self
            .snapshot_provider
            .ok_or_else(|| ServiceError::validation("snapshot_provider is required"))?;
        let engine = RosterEngine::new(self.engine_config.unwrap_or_default());

        let roster = RosterAssignmentStore::load(repo).await?;

        let snapshots = SnapshotCache::new(provider);
        if let Err(err) = snapshots.refresh().await {
            tracing::warn!(error = %err, "Initial snapshot fetch failed, starting empty");
        }

        Ok(ServiceContext::new(
            Arc::new(engine),
            Arc::new(snapshots),
            Arc::new(roster),
        ))
    }
}
