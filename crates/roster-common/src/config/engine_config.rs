//! Engine configuration
//!
//! Rank semantics, specialization tables and the class → buff table are
//! deployment configuration, passed explicitly into every engine component.

use roster_core::{Buff, PlayableClass, Role};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::app_config::ConfigError;

/// Default rank indices treated as main characters
pub const DEFAULT_MAIN_RANKS: [u8; 6] = [0, 1, 2, 3, 4, 5];
/// Default rank indices treated as alts
pub const DEFAULT_ALT_RANKS: [u8; 2] = [6, 7];

/// Default tank specializations
pub const DEFAULT_TANK_SPECS: [&str; 5] = ["Blood", "Vengeance", "Guardian", "Brewmaster", "Protection"];
/// Default healer specializations
pub const DEFAULT_HEALER_SPECS: [&str; 5] = [
    "Restoration",
    "Holy",
    "Discipline",
    "Mistweaver",
    "Preservation",
];

/// Main/alt rank partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    main_ranks: BTreeSet<u8>,
    alt_ranks: BTreeSet<u8>,
}

impl RankConfig {
    /// Create a rank partition
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a rank index is both main and alt
    pub fn new(
        main_ranks: impl IntoIterator<Item = u8>,
        alt_ranks: impl IntoIterator<Item = u8>,
    ) -> Result<Self, ConfigError> {
        let main_ranks: BTreeSet<u8> = main_ranks.into_iter().collect();
        let alt_ranks: BTreeSet<u8> = alt_ranks.into_iter().collect();

        if let Some(rank) = main_ranks.intersection(&alt_ranks).next() {
            return Err(ConfigError::InvalidValue(
                "ALT_RANKS",
                format!("rank {rank} is also listed in MAIN_RANKS"),
            ));
        }

        Ok(Self {
            main_ranks,
            alt_ranks,
        })
    }

    #[inline]
    pub fn is_main(&self, rank: u8) -> bool {
        self.main_ranks.contains(&rank)
    }

    #[inline]
    pub fn is_alt(&self, rank: u8) -> bool {
        self.alt_ranks.contains(&rank)
    }

    pub fn main_ranks(&self) -> &BTreeSet<u8> {
        &self.main_ranks
    }

    pub fn alt_ranks(&self) -> &BTreeSet<u8> {
        &self.alt_ranks
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            main_ranks: DEFAULT_MAIN_RANKS.into_iter().collect(),
            alt_ranks: DEFAULT_ALT_RANKS.into_iter().collect(),
        }
    }
}

/// Tank and healer specialization lookup tables
///
/// Labels are stored lowercased; lookups trim and lowercase their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTables {
    tank_specs: HashSet<String>,
    healer_specs: HashSet<String>,
}

impl SpecTables {
    pub fn new<T, H>(tank_specs: T, healer_specs: H) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        Self {
            tank_specs: tank_specs.into_iter().map(|s| normalize_spec(s.as_ref())).collect(),
            healer_specs: healer_specs.into_iter().map(|s| normalize_spec(s.as_ref())).collect(),
        }
    }

    pub fn is_tank_spec(&self, specialization: &str) -> bool {
        self.tank_specs.contains(&normalize_spec(specialization))
    }

    pub fn is_healer_spec(&self, specialization: &str) -> bool {
        self.healer_specs.contains(&normalize_spec(specialization))
    }
}

impl Default for SpecTables {
    fn default() -> Self {
        Self::new(DEFAULT_TANK_SPECS, DEFAULT_HEALER_SPECS)
    }
}

fn normalize_spec(specialization: &str) -> String {
    specialization.trim().to_lowercase()
}

/// A buff a class provides, optionally only when playing a given role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuffRule {
    pub buff: Buff,
    pub required_role: Option<Role>,
}

impl BuffRule {
    /// Buff provided regardless of role
    pub const fn always(buff: Buff) -> Self {
        Self {
            buff,
            required_role: None,
        }
    }

    /// Buff provided only when the member's primary role matches
    pub const fn when(buff: Buff, role: Role) -> Self {
        Self {
            buff,
            required_role: Some(role),
        }
    }

    /// Check whether a member with `role` contributes this buff
    #[inline]
    pub fn applies_to(&self, role: Role) -> bool {
        self.required_role.is_none_or(|required| required == role)
    }
}

/// Class → buff contribution table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuffTable {
    rules: HashMap<PlayableClass, Vec<BuffRule>>,
}

impl BuffTable {
    /// Create an empty table (no class contributes anything)
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Replace the rules for a class
    #[must_use]
    pub fn with_class(mut self, class: PlayableClass, rules: Vec<BuffRule>) -> Self {
        self.rules.insert(class, rules);
        self
    }

    /// Rules for a class; classes without an entry contribute nothing
    pub fn rules_for(&self, class: PlayableClass) -> &[BuffRule] {
        self.rules.get(&class).map_or(&[], Vec::as_slice)
    }
}

impl Default for BuffTable {
    fn default() -> Self {
        use Buff as B;
        use BuffRule as R;
        use PlayableClass as C;

        Self::empty()
            .with_class(C::DeathKnight, vec![R::always(B::CombatRes), R::always(B::DeathGrip)])
            .with_class(C::DemonHunter, vec![R::always(B::MagicDamage), R::always(B::Darkness)])
            .with_class(
                C::Druid,
                vec![
                    R::always(B::Versatility),
                    R::always(B::CombatRes),
                    R::always(B::Innervate),
                    R::always(B::MovementSpeed),
                ],
            )
            .with_class(C::Evoker, vec![R::always(B::Bloodlust), R::always(B::MovementSpeed)])
            .with_class(C::Hunter, vec![R::always(B::Bloodlust)])
            .with_class(C::Mage, vec![R::always(B::Intellect), R::always(B::Bloodlust)])
            .with_class(C::Monk, vec![R::always(B::PhysicalDamage)])
            .with_class(
                C::Paladin,
                vec![
                    R::always(B::Blessings),
                    R::always(B::CombatRes),
                    R::when(B::DevotionAura, Role::Healer),
                    R::when(B::Spellwarding, Role::Tank),
                ],
            )
            .with_class(C::Priest, vec![R::always(B::Stamina), R::when(B::MassDispel, Role::Healer)])
            .with_class(C::Rogue, vec![R::always(B::BossDamageReduction)])
            .with_class(C::Shaman, vec![R::always(B::Bloodlust), R::always(B::SkyfuryWindfury)])
            .with_class(C::Warlock, vec![R::always(B::CombatRes), R::always(B::PortalAndCookies)])
            .with_class(C::Warrior, vec![R::always(B::AttackPower), R::always(B::RallyingCry)])
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub ranks: RankConfig,
    pub specs: SpecTables,
    pub buff_table: BuffTable,
}
