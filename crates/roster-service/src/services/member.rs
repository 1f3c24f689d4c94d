//! Member service
//!
//! Search, filtering and lockout lookups over the published snapshot.

use tracing::{debug, instrument};
use validator::Validate;

use crate::dto::{LockoutResponse, MemberListResponse, MemberQuery, MemberResponse, SnapshotInfo};
use crate::engine::{evaluate_lockout, paginate, FilterCriteria};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filter, then paginate, the current snapshot
    #[instrument(skip(self))]
    pub fn list_members(&self, query: &MemberQuery) -> ServiceResult<MemberListResponse> {
        query
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let criteria = FilterCriteria::from_query(query)?;

        let snapshot = self.ctx.snapshots().current();
        let matched = self.ctx.engine().filter_members(&snapshot.members, &criteria);
        debug!(matched = matched.len(), total = snapshot.len(), "Members filtered");

        let assignment = self.ctx.roster().snapshot();
        let engine = self.ctx.engine();
        let page = paginate(&matched, query.page(), query.page_size()).map(|member| {
            MemberResponse::new(
                member,
                engine.resolver().role_of(member),
                assignment.bucket_of(&member.name),
                evaluate_lockout(&member.lockout_progress),
            )
        });

        Ok(MemberListResponse {
            snapshot: SnapshotInfo::from(snapshot.as_ref()),
            page,
        })
    }

    /// Look up one member by name (case-insensitive)
    #[instrument(skip(self))]
    pub fn get_member(&self, name: &str) -> ServiceResult<MemberResponse> {
        let snapshot = self.ctx.snapshots().current();
        let member = snapshot
            .find(name)
            .ok_or_else(|| ServiceError::not_found("Member", name))?;

        Ok(MemberResponse::new(
            member,
            self.ctx.engine().resolver().role_of(member),
            self.ctx.roster().bucket_of(&member.name),
            evaluate_lockout(&member.lockout_progress),
        ))
    }

    #[instrument(skip(self))]
    pub fn member_lockout(&self, name: &str) -> ServiceResult<LockoutResponse> {
        let snapshot = self.ctx.snapshots().current();
        let member = snapshot
            .find(name)
            .ok_or_else(|| ServiceError::not_found("Member", name))?;

        Ok(LockoutResponse {
            name: member.name.clone(),
            lockout: evaluate_lockout(&member.lockout_progress),
        })
    }
}
