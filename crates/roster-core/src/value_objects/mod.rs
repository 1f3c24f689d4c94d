//! Value objects - immutable types that represent domain concepts

mod buff;
mod class;
mod lockout;
mod role;

pub use buff::Buff;
pub use class::PlayableClass;
pub use lockout::{DifficultyProgress, LockoutProgress};
pub use role::{Role, RoleBucket};
