//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Every read
//! response carries a [`SnapshotInfo`] so clients can tell "no data yet"
//! apart from an empty result.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use roster_core::{Buff, Member, PlayableClass, Role, RoleBucket, RosterAssignment, RosterSnapshot};
use serde::Serialize;

use crate::engine::{BuffCoverage, LockoutSummary, Page, RosterOverview, ScoreKey};

// ============================================================================
// Common Response Types
// ============================================================================

/// Whether the engine has roster data yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotState {
    Empty,
    Ready,
}

/// Provenance of the data a response was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    pub state: SnapshotState,
    pub member_count: usize,
    pub fetched_at: DateTime<Utc>,
}

impl From<&RosterSnapshot> for SnapshotInfo {
    fn from(snapshot: &RosterSnapshot) -> Self {
        Self {
            state: if snapshot.is_empty() {
                SnapshotState::Empty
            } else {
                SnapshotState::Ready
            },
            member_count: snapshot.len(),
            fetched_at: snapshot.fetched_at,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member with derived role and lockout state
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub name: String,
    pub class: PlayableClass,
    pub specialization: String,
    pub role: Role,
    pub guild_rank_index: u8,
    pub item_level: u32,
    pub mplus_rating: f64,
    pub pvp_rating: u32,
    pub missing_enchant_slots: BTreeSet<String>,
    pub has_tier_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_asset_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<RoleBucket>,
    pub lockout: LockoutSummary,
}

impl MemberResponse {
    pub fn new(
        member: &Member,
        role: Role,
        bucket: Option<RoleBucket>,
        lockout: LockoutSummary,
    ) -> Self {
        Self {
            name: member.name.clone(),
            class: member.class,
            specialization: member.specialization.clone(),
            role,
            guild_rank_index: member.guild_rank_index,
            item_level: member.item_level,
            mplus_rating: member.mplus_rating,
            pvp_rating: member.pvp_rating,
            missing_enchant_slots: member.missing_enchant_slots.clone(),
            has_tier_set: member.has_tier_set,
            media_asset_ref: member.media_asset_ref.clone(),
            bucket,
            lockout,
        }
    }
}

/// One page of filtered members
#[derive(Debug, Clone, Serialize)]
pub struct MemberListResponse {
    pub snapshot: SnapshotInfo,
    #[serde(flatten)]
    pub page: Page<MemberResponse>,
}

/// Lockout detail for one member
#[derive(Debug, Clone, Serialize)]
pub struct LockoutResponse {
    pub name: String,
    pub lockout: LockoutSummary,
}

// ============================================================================
// Aggregation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub position: usize,
    pub name: String,
    pub class: PlayableClass,
    pub specialization: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub snapshot: SnapshotInfo,
    pub score: ScoreKey,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub snapshot: SnapshotInfo,
    pub overview: RosterOverview,
}

// ============================================================================
// Roster Responses
// ============================================================================

/// Curated roster, every bucket present
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub total: usize,
    pub buckets: RosterAssignment,
}

impl From<&RosterAssignment> for RosterResponse {
    fn from(assignment: &RosterAssignment) -> Self {
        Self {
            total: assignment.len(),
            buckets: assignment.clone(),
        }
    }
}

/// Result of moving or removing a member
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub name: String,
    pub bucket: Option<RoleBucket>,
    pub previous_bucket: Option<RoleBucket>,
}

/// Raid buff coverage of the curated roster
#[derive(Debug, Clone, Serialize)]
pub struct BuffCoverageResponse {
    pub snapshot: SnapshotInfo,
    /// Assigned raiders found in the snapshot
    pub raiders: usize,
    pub coverage: BuffCoverage,
    pub missing: Vec<Buff>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub snapshot: SnapshotInfo,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Per-dependency health
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// Roster assignment storage
    pub storage: String,
    pub snapshot: SnapshotState,
}

impl ReadinessResponse {
    /// An empty snapshot is reported but does not make the service unready.
    pub fn ready(storage_healthy: bool, snapshot: SnapshotState) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
                snapshot,
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
