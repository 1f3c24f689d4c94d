//! Roster service
//!
//! Curated roster management and raid buff coverage.

use roster_core::RoleBucket;
use tracing::instrument;
use validator::Validate;

use crate::dto::{AssignMemberRequest, AssignmentResponse, BuffCoverageResponse, RosterResponse, SnapshotInfo};
use crate::engine::build_buff_entries;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn get_roster(&self) -> RosterResponse {
        RosterResponse::from(self.ctx.roster().snapshot().as_ref())
    }

    /// Move a member into a bucket
    ///
    /// Members do not need to be in the current snapshot: curated rosters may
    /// reference characters the data provider has not delivered yet.
    #[instrument(skip(self, request))]
    pub async fn assign(
        &self,
        name: &str,
        request: AssignMemberRequest,
    ) -> ServiceResult<AssignmentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let bucket: RoleBucket = request.bucket.parse()?;

        let previous_bucket = self.ctx.roster().assign(name, bucket).await?;

        Ok(AssignmentResponse {
            name: name.trim().to_string(),
            bucket: Some(bucket),
            previous_bucket,
        })
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, name: &str) -> ServiceResult<AssignmentResponse> {
        let previous_bucket = self.ctx.roster().remove(name).await?;

        Ok(AssignmentResponse {
            name: name.trim().to_string(),
            bucket: None,
            previous_bucket,
        })
    }

    /// Buff coverage of the tanks, healers and dps buckets
    #[instrument(skip(self))]
    pub fn buff_coverage(&self) -> BuffCoverageResponse {
        let snapshot = self.ctx.snapshots().current();
        let assignment = self.ctx.roster().snapshot();

        let entries = build_buff_entries(&assignment, &snapshot);
        let coverage = self.ctx.engine().buff_coverage(&entries);

        BuffCoverageResponse {
            snapshot: SnapshotInfo::from(snapshot.as_ref()),
            raiders: entries.len(),
            missing: coverage.missing(),
            coverage,
        }
    }
}
