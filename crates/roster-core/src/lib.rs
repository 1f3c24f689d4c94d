//! # roster-core
//!
//! Domain layer containing roster entities, value objects, and the ports the
//! engine uses to reach its external collaborators.
//! This crate has zero dependencies on infrastructure (storage, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

mod serde_util;

// Re-export commonly used types at crate root
pub use entities::{names_match, Member, RosterAssignment, RosterSnapshot};
pub use error::DomainError;
pub use traits::{RepoResult, RosterRepository, SnapshotProvider};
pub use value_objects::{
    Buff, DifficultyProgress, LockoutProgress, PlayableClass, Role, RoleBucket,
};
