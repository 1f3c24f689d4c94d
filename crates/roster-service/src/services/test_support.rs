//! Context fixtures shared by the service tests.

use std::sync::Arc;

use roster_cache::{MemoryRosterRepository, StaticSnapshotProvider};
use roster_core::Member;

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) async fn context_with(members: Vec<Member>) -> ServiceContext {
    context_with_repo(members, Arc::new(MemoryRosterRepository::new())).await
}

pub(crate) async fn context_with_repo(
    members: Vec<Member>,
    repo: Arc<MemoryRosterRepository>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .roster_repo(repo)
        .snapshot_provider(Arc::new(StaticSnapshotProvider::new(members)))
        .build()
        .await
        .unwrap()
}

pub(crate) async fn context_with_provider(provider: Arc<StaticSnapshotProvider>) -> ServiceContext {
    ServiceContextBuilder::new()
        .roster_repo(Arc::new(MemoryRosterRepository::new()))
        .snapshot_provider(provider)
        .build()
        .await
        .unwrap()
}
