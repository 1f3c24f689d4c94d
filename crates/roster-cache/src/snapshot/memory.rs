//! In-process snapshot provider for development and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{Member, RepoResult, RosterSnapshot, SnapshotProvider};

/// Serves whatever member list was last handed to it
#[derive(Debug, Default)]
pub struct StaticSnapshotProvider {
    members: RwLock<Vec<Member>>,
}

impl StaticSnapshotProvider {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }

    /// Replace the members served by the next fetch
    pub fn set_members(&self, members: Vec<Member>) {
        *self.members.write() = members;
    }
}

#[async_trait]
impl SnapshotProvider for StaticSnapshotProvider {
    async fn fetch_snapshot(&self) -> RepoResult<RosterSnapshot> {
        Ok(RosterSnapshot::new(self.members.read().clone()))
    }
}
