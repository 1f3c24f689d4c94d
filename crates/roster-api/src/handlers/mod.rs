//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod leaderboards;
pub mod members;
pub mod roster;
pub mod snapshot;
pub mod stats;
