//! Playable class value object
//!
//! The fixed set of 13 classes a roster member can belong to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Playable character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayableClass {
    DeathKnight,
    DemonHunter,
    Druid,
    Evoker,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl PlayableClass {
    /// All classes in canonical (alphabetical) order
    pub const ALL: [PlayableClass; 13] = [
        Self::DeathKnight,
        Self::DemonHunter,
        Self::Druid,
        Self::Evoker,
        Self::Hunter,
        Self::Mage,
        Self::Monk,
        Self::Paladin,
        Self::Priest,
        Self::Rogue,
        Self::Shaman,
        Self::Warlock,
        Self::Warrior,
    ];

    /// Display name as shown in-game
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeathKnight => "Death Knight",
            Self::DemonHunter => "Demon Hunter",
            Self::Druid => "Druid",
            Self::Evoker => "Evoker",
            Self::Hunter => "Hunter",
            Self::Mage => "Mage",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Priest => "Priest",
            Self::Rogue => "Rogue",
            Self::Shaman => "Shaman",
            Self::Warlock => "Warlock",
            Self::Warrior => "Warrior",
        }
    }

    /// Specializations available to this class
    pub fn specializations(&self) -> &'static [&'static str] {
        match self {
            Self::DeathKnight => &["Blood", "Frost", "Unholy"],
            Self::DemonHunter => &["Havoc", "Vengeance"],
            Self::Druid => &["Balance", "Feral", "Guardian", "Restoration"],
            Self::Evoker => &["Augmentation", "Devastation", "Preservation"],
            Self::Hunter => &["Beast Mastery", "Marksmanship", "Survival"],
            Self::Mage => &["Arcane", "Fire", "Frost"],
            Self::Monk => &["Brewmaster", "Mistweaver", "Windwalker"],
            Self::Paladin => &["Holy", "Protection", "Retribution"],
            Self::Priest => &["Discipline", "Holy", "Shadow"],
            Self::Rogue => &["Assassination", "Outlaw", "Subtlety"],
            Self::Shaman => &["Elemental", "Enhancement", "Restoration"],
            Self::Warlock => &["Affliction", "Demonology", "Destruction"],
            Self::Warrior => &["Arms", "Fury", "Protection"],
        }
    }

    /// Check whether a specialization label belongs to this class
    pub fn has_specialization(&self, specialization: &str) -> bool {
        let specialization = specialization.trim();
        self.specializations()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(specialization))
    }
}

impl fmt::Display for PlayableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayableClass {
    type Err = DomainError;

    /// Parse a class name, ignoring case, spaces, hyphens and underscores
    /// ("Death Knight", "death-knight" and "DEATH_KNIGHT" are all accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match compact.as_str() {
            "deathknight" => Ok(Self::DeathKnight),
            "demonhunter" => Ok(Self::DemonHunter),
            "druid" => Ok(Self::Druid),
            "evoker" => Ok(Self::Evoker),
            "hunter" => Ok(Self::Hunter),
            "mage" => Ok(Self::Mage),
            "monk" => Ok(Self::Monk),
            "paladin" => Ok(Self::Paladin),
            "priest" => Ok(Self::Priest),
            "rogue" => Ok(Self::Rogue),
            "shaman" => Ok(Self::Shaman),
            "warlock" => Ok(Self::Warlock),
            "warrior" => Ok(Self::Warrior),
            _ => Err(DomainError::UnknownClass(s.to_string())),
        }
    }
}

impl Serialize for PlayableClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PlayableClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
