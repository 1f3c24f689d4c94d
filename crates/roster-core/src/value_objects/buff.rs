//! Raid-wide buff identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raid-wide buff or utility a class can bring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Buff {
    Intellect,
    AttackPower,
    Stamina,
    Bloodlust,
    CombatRes,
    MagicDamage,
    PhysicalDamage,
    Versatility,
    MovementSpeed,
    DevotionAura,
    Darkness,
    RallyingCry,
    Innervate,
    PortalAndCookies,
    MassDispel,
    DeathGrip,
    Blessings,
    SkyfuryWindfury,
    BossDamageReduction,
    Spellwarding,
}

impl Buff {
    /// All tracked buffs in canonical order
    pub const ALL: [Buff; 20] = [
        Self::Intellect,
        Self::AttackPower,
        Self::Stamina,
        Self::Bloodlust,
        Self::CombatRes,
        Self::MagicDamage,
        Self::PhysicalDamage,
        Self::Versatility,
        Self::MovementSpeed,
        Self::DevotionAura,
        Self::Darkness,
        Self::RallyingCry,
        Self::Innervate,
        Self::PortalAndCookies,
        Self::MassDispel,
        Self::DeathGrip,
        Self::Blessings,
        Self::SkyfuryWindfury,
        Self::BossDamageReduction,
        Self::Spellwarding,
    ];

    /// Wire identifier (camelCase)
    pub fn id(&self) -> &'static str {
        match self {
            Self::Intellect => "intellect",
            Self::AttackPower => "attackPower",
            Self::Stamina => "stamina",
            Self::Bloodlust => "bloodlust",
            Self::CombatRes => "combatRes",
            Self::MagicDamage => "magicDamage",
            Self::PhysicalDamage => "physicalDamage",
            Self::Versatility => "versatility",
            Self::MovementSpeed => "movementSpeed",
            Self::DevotionAura => "devotionAura",
            Self::Darkness => "darkness",
            Self::RallyingCry => "rallyingCry",
            Self::Innervate => "innervate",
            Self::PortalAndCookies => "portalAndCookies",
            Self::MassDispel => "massDispel",
            Self::DeathGrip => "deathGrip",
            Self::Blessings => "blessings",
            Self::SkyfuryWindfury => "skyfuryWindfury",
            Self::BossDamageReduction => "bossDamageReduction",
            Self::Spellwarding => "spellwarding",
        }
    }
}

impl fmt::Display for Buff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
