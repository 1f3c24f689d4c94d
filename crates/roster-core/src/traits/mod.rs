//! Ports implemented by infrastructure crates

mod repositories;

pub use repositories::{RepoResult, RosterRepository, SnapshotProvider};
