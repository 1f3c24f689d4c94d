//! Roster assignment persistence adapters.

mod memory;
mod redis_roster;

pub use memory::MemoryRosterRepository;
pub use redis_roster::{RedisRosterRepository, DEFAULT_ROSTER_KEY};
