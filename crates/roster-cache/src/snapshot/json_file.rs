//! Snapshot provider reading the data provider's JSON export from disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use roster_core::{DomainError, Member, RepoResult, RosterSnapshot, SnapshotProvider};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Reads a roster export: either a bare JSON array of members or an object
/// with a `members` array.
///
/// A file that does not exist yet yields an empty snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotProvider {
    path: PathBuf,
}

impl JsonFileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode an export document into members
pub fn parse_members(raw: &str) -> RepoResult<Vec<Member>> {
    let document: Value = serde_json::from_str(raw).map_err(provider_error)?;

    let members = match document {
        Value::Array(_) => document,
        Value::Object(mut object) => object.remove("members").ok_or_else(|| {
            DomainError::ProviderError("snapshot object has no `members` array".to_string())
        })?,
        other => {
            return Err(DomainError::ProviderError(format!(
                "snapshot must be an array or object, got {other}"
            )))
        }
    };

    serde_json::from_value(members).map_err(provider_error)
}

fn provider_error(err: serde_json::Error) -> DomainError {
    DomainError::ProviderError(format!("invalid snapshot document: {err}"))
}

#[async_trait]
impl SnapshotProvider for JsonFileSnapshotProvider {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_snapshot(&self) -> RepoResult<RosterSnapshot> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("Snapshot file not found, treating roster as empty");
                return Ok(RosterSnapshot::empty());
            }
            Err(err) => {
                return Err(DomainError::ProviderError(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };

        let members = parse_members(&raw)?;
        debug!(members = members.len(), "Snapshot loaded");
        Ok(RosterSnapshot::new(members))
    }
}
