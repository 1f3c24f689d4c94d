//! Snapshot loading and publication.

mod cache;
mod json_file;
mod memory;

pub use cache::SnapshotCache;
pub use json_file::{parse_members, JsonFileSnapshotProvider};
pub use memory::StaticSnapshotProvider;
