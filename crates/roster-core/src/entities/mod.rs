//! Domain entities - core business objects

mod assignment;
mod member;
mod snapshot;

pub use assignment::RosterAssignment;
pub use member::{names_match, Member};
pub use snapshot::RosterSnapshot;
