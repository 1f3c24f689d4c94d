//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{
    AssignMemberRequest, LeaderboardQuery, MemberQuery, StatsQuery, DEFAULT_LEADERBOARD_SIZE,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

pub use responses::{
    AssignmentResponse, BuffCoverageResponse, HealthChecks, HealthResponse, LeaderboardEntry,
    LeaderboardResponse, LockoutResponse, MemberListResponse, MemberResponse, ReadinessResponse,
    RefreshResponse, RosterResponse, SnapshotInfo, SnapshotState, StatsResponse,
};
