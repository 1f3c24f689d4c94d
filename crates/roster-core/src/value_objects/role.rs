//! Functional roles and curated roster buckets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Functional role a specialization fills in group content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::Healer => "healer",
            Self::Dps => "dps",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tank" | "tanks" => Ok(Self::Tank),
            "healer" | "healers" => Ok(Self::Healer),
            "dps" => Ok(Self::Dps),
            _ => Err(DomainError::ValidationError(format!("Invalid role: {s}"))),
        }
    }
}

/// Hand-curated roster category
///
/// Declaration order is the canonical bucket order used in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleBucket {
    Tanks,
    Healers,
    Dps,
    Substitutes,
    Socials,
}

impl RoleBucket {
    /// Every bucket in canonical order
    pub const ALL: [RoleBucket; 5] = [
        Self::Tanks,
        Self::Healers,
        Self::Dps,
        Self::Substitutes,
        Self::Socials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tanks => "tanks",
            Self::Healers => "healers",
            Self::Dps => "dps",
            Self::Substitutes => "substitutes",
            Self::Socials => "socials",
        }
    }

    /// The raid role members of this bucket play, if it is a raiding bucket
    pub fn primary_role(&self) -> Option<Role> {
        match self {
            Self::Tanks => Some(Role::Tank),
            Self::Healers => Some(Role::Healer),
            Self::Dps => Some(Role::Dps),
            Self::Substitutes | Self::Socials => None,
        }
    }
}

impl fmt::Display for RoleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tanks" => Ok(Self::Tanks),
            "healers" => Ok(Self::Healers),
            "dps" => Ok(Self::Dps),
            "substitutes" => Ok(Self::Substitutes),
            "socials" => Ok(Self::Socials),
            _ => Err(DomainError::UnknownBucket(s.to_string())),
        }
    }
}
