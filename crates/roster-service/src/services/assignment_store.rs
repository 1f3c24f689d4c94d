//! Roster assignment store
//!
//! The only shared mutable state in the engine. Writers are serialized; each
//! write mutates a private copy, persists it, and only then publishes it.
//! Readers take an `Arc` of the published assignment and never observe a
//! half-applied or unsaved change.

use std::sync::Arc;

use parking_lot::RwLock;
use roster_core::{DomainError, RoleBucket, RosterAssignment, RosterRepository};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use super::error::{ServiceError, ServiceResult};

pub struct RosterAssignmentStore {
    repo: Arc<dyn RosterRepository>,
    published: RwLock<Arc<RosterAssignment>>,
    writer: Mutex<()>,
}

impl RosterAssignmentStore {
    /// Store starting from an empty assignment
    pub fn new(repo: Arc<dyn RosterRepository>) -> Self {
        Self::with_assignment(repo, RosterAssignment::new())
    }

    fn with_assignment(repo: Arc<dyn RosterRepository>, assignment: RosterAssignment) -> Self {
        Self {
            repo,
            published: RwLock::new(Arc::new(assignment)),
            writer: Mutex::new(()),
        }
    }

    /// Build the store from persisted state; empty when nothing was saved
    #[instrument(skip(repo))]
    pub async fn load(repo: Arc<dyn RosterRepository>) -> ServiceResult<Self> {
        let assignment = repo.load().await?.unwrap_or_default();
        info!(members = assignment.len(), "Roster assignment loaded");
        Ok(Self::with_assignment(repo, assignment))
    }

    /// Point-in-time copy of every bucket
    pub fn snapshot(&self) -> Arc<RosterAssignment> {
        self.published.read().clone()
    }

    pub fn bucket_of(&self, name: &str) -> Option<RoleBucket> {
        self.snapshot().bucket_of(name)
    }

    pub fn members_in(&self, bucket: RoleBucket) -> Vec<String> {
        self.snapshot().members(bucket).to_vec()
    }

    /// Move `name` into `bucket`, returning its previous bucket
    ///
    /// # Errors
    /// `INVALID_MEMBER_NAME` for a blank name; `AssignmentNotSaved` when the
    /// repository rejects the write (the published roster is left unchanged).
    #[instrument(skip(self))]
    pub async fn assign(&self, name: &str, bucket: RoleBucket) -> ServiceResult<Option<RoleBucket>> {
        let name = normalize_name(name)?;
        let previous = self
            .commit(|assignment| assignment.assign(name.clone(), bucket))
            .await?;

        info!(member = %name, previous = ?previous, "Member assigned");
        Ok(previous)
    }

    /// Remove `name` from the roster; removing an unassigned member is a no-op
    #[instrument(skip(self))]
    pub async fn remove(&self, name: &str) -> ServiceResult<Option<RoleBucket>> {
        let name = normalize_name(name)?;
        if self.bucket_of(&name).is_none() {
            return Ok(None);
        }

        let previous = self.commit(|assignment| assignment.remove(&name)).await?;
        info!(member = %name, previous = ?previous, "Member removed from roster");
        Ok(previous)
    }

    /// Apply `mutate` to a copy, persist it, then publish it
    async fn commit<F, R>(&self, mutate: F) -> ServiceResult<R>
    where
        F: FnOnce(&mut RosterAssignment) -> R + Send,
        R: Send,
    {
        let _writer = self.writer.lock().await;

        let mut next = (**self.published.read()).clone();
        let outcome = mutate(&mut next);

        if let Err(err) = self.repo.save(&next).await {
            warn!(error = %err, "Roster assignment not persisted, keeping previous state");
            return Err(ServiceError::AssignmentNotSaved(err));
        }

        *self.published.write() = Arc::new(next);
        Ok(outcome)
    }
}

impl std::fmt::Debug for RosterAssignmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterAssignmentStore")
            .field("members", &self.published.read().len())
            .finish()
    }
}

fn normalize_name(name: &str) -> ServiceResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidMemberName("member name must not be empty".into()).into());
    }
    Ok(trimmed.to_string())
}
