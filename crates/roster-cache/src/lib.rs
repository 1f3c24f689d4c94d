//! # roster-cache
//!
//! Adapters for the engine's external collaborators.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Roster Storage**: Assignment document in Redis, or in memory
//! - **Snapshots**: JSON export loader, a static provider for tests, and an
//!   atomically swapped snapshot cache
//!
//! ## Example
//!
//! ```ignore
//! use roster_cache::{RedisPool, RedisRosterRepository, JsonFileSnapshotProvider, SnapshotCache};
//!
//! let pool = RedisPool::from_config(&redis_config)?;
//! let repo = RedisRosterRepository::new(pool, "roster:assignment");
//!
//! let provider = Arc::new(JsonFileSnapshotProvider::new("./data/roster.json"));
//! let snapshots = SnapshotCache::load(provider).await?;
//! ```

pub mod pool;
pub mod repository;
pub mod snapshot;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use repository::{MemoryRosterRepository, RedisRosterRepository, DEFAULT_ROSTER_KEY};
pub use snapshot::{parse_members, JsonFileSnapshotProvider, SnapshotCache, StaticSnapshotProvider};
