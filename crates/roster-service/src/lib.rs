//! # roster-service
//!
//! Application layer: the read-path roster engine, the roster assignment
//! store, use-case services and DTOs.

pub mod dto;
pub mod engine;
pub mod services;

pub use engine::RosterEngine;
pub use services::{
    MemberService, RosterAssignmentStore, RosterService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SnapshotService, StatsService,
};
