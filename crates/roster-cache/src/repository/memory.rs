//! In-process roster repository for development and tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{DomainError, RepoResult, RosterAssignment, RosterRepository};

/// Roster repository kept in memory
///
/// Can be switched into an unavailable state, in which every call fails
/// with a storage error.
#[derive(Debug, Default)]
pub struct MemoryRosterRepository {
    stored: Mutex<Option<RosterAssignment>>,
    unavailable: AtomicBool,
}

impl MemoryRosterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `assignment`
    pub fn with_assignment(assignment: RosterAssignment) -> Self {
        Self {
            stored: Mutex::new(Some(assignment)),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Last successfully saved assignment
    pub fn stored(&self) -> Option<RosterAssignment> {
        self.stored.lock().clone()
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::StorageError(
                "roster storage unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RosterRepository for MemoryRosterRepository {
    async fn load(&self) -> RepoResult<Option<RosterAssignment>> {
        self.check_available()?;
        Ok(self.stored.lock().clone())
    }

    async fn save(&self, assignment: &RosterAssignment) -> RepoResult<()> {
        self.check_available()?;
        *self.stored.lock() = Some(assignment.clone());
        Ok(())
    }
}
