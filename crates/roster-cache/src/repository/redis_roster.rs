//! Redis-backed roster assignment storage.
//!
//! The whole assignment is one JSON document under a single key.

use async_trait::async_trait;
use roster_core::{DomainError, RepoResult, RosterAssignment, RosterRepository};
use tracing::{debug, instrument};

use crate::pool::{RedisPool, RedisPoolError};

/// Default key for the persisted assignment
pub const DEFAULT_ROSTER_KEY: &str = "roster:assignment";

/// Roster repository storing the assignment document in Redis
#[derive(Debug, Clone)]
pub struct RedisRosterRepository {
    pool: RedisPool,
    key: String,
}

impl RedisRosterRepository {
    pub fn new(pool: RedisPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn storage_error(err: RedisPoolError) -> DomainError {
    DomainError::StorageError(err.to_string())
}

#[async_trait]
impl RosterRepository for RedisRosterRepository {
    #[instrument(skip(self), fields(key = %self.key))]
    async fn load(&self) -> RepoResult<Option<RosterAssignment>> {
        let assignment = self
            .pool
            .get_json::<RosterAssignment>(&self.key)
            .await
            .map_err(storage_error)?;

        debug!(found = assignment.is_some(), "Loaded roster assignment");
        Ok(assignment)
    }

    #[instrument(skip(self, assignment), fields(key = %self.key, members = assignment.len()))]
    async fn save(&self, assignment: &RosterAssignment) -> RepoResult<()> {
        self.pool
            .set_json(&self.key, assignment)
            .await
            .map_err(storage_error)?;

        debug!("Saved roster assignment");
        Ok(())
    }
}
