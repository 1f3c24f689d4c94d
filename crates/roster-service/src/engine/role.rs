//! Role resolution
//!
//! Maps a specialization label to the functional role it plays.

use roster_common::SpecTables;
use roster_core::{Member, Role};

/// Resolves specializations to tank / healer / dps
#[derive(Debug, Clone, Default)]
pub struct RoleResolver {
    specs: SpecTables,
}

impl RoleResolver {
    pub fn new(specs: SpecTables) -> Self {
        Self { specs }
    }

    /// Resolve a specialization label. Total: anything unrecognized is dps.
    ///
    /// The tank table is consulted before the healer table.
    pub fn resolve(&self, specialization: &str) -> Role {
        if self.specs.is_tank_spec(specialization) {
            Role::Tank
        } else if self.specs.is_healer_spec(specialization) {
            Role::Healer
        } else {
            Role::Dps
        }
    }

    #[inline]
    pub fn role_of(&self, member: &Member) -> Role {
        self.resolve(&member.specialization)
    }
}
