//! Snapshot service

use tracing::{info, instrument};

use crate::dto::{RefreshResponse, SnapshotInfo};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct SnapshotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SnapshotService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn status(&self) -> SnapshotInfo {
        SnapshotInfo::from(self.ctx.snapshots().current().as_ref())
    }

    /// Pull a fresh snapshot from the provider
    ///
    /// On failure the previous snapshot remains published.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> ServiceResult<RefreshResponse> {
        let snapshot = self
            .ctx
            .snapshots()
            .refresh()
            .await
            .map_err(ServiceError::SnapshotUnavailable)?;

        info!(members = snapshot.len(), "Snapshot refreshed");
        Ok(RefreshResponse {
            snapshot: SnapshotInfo::from(snapshot.as_ref()),
        })
    }
}
