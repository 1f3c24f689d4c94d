//! Roster services
//!
//! Use cases over the engine: each service borrows the shared
//! [`ServiceContext`] and returns response DTOs.

pub mod assignment_store;
pub mod context;
pub mod error;
pub mod member;
pub mod roster;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use assignment_store::RosterAssignmentStore;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use roster::RosterService;
pub use snapshot::SnapshotService;
pub use stats::StatsService;
