//! Repository traits (ports) - define the interface for external collaborators
//!
//! The domain layer defines what it needs from the outside world; adapter
//! crates provide the implementations.

use async_trait::async_trait;

use crate::entities::{RosterAssignment, RosterSnapshot};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Roster Repository
// ============================================================================

/// Durable storage for the curated roster assignment
///
/// Whole-document get/put semantics: there are no partial updates.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the persisted assignment, `None` if nothing has been saved yet
    async fn load(&self) -> RepoResult<Option<RosterAssignment>>;

    /// Replace the persisted assignment
    async fn save(&self, assignment: &RosterAssignment) -> RepoResult<()>;
}

// ============================================================================
// Snapshot Provider
// ============================================================================

/// Upstream source of roster snapshots
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch a complete, already-normalized snapshot
    async fn fetch_snapshot(&self) -> RepoResult<RosterSnapshot>;
}
