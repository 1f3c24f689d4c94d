//! Member filtering and search

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use roster_common::RankConfig;
use roster_core::{DomainError, Member, PlayableClass, Role};

use super::lockout::evaluate_lockout;
use super::role::RoleResolver;
use crate::dto::MemberQuery;

/// Which guild ranks to include
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankSelector {
    #[default]
    All,
    Mains,
    Alts,
}

impl RankSelector {
    pub fn accepts(&self, rank: u8, ranks: &RankConfig) -> bool {
        match self {
            Self::All => true,
            Self::Mains => ranks.is_main(rank),
            Self::Alts => ranks.is_alt(rank),
        }
    }
}

impl FromStr for RankSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "mains" | "main" => Ok(Self::Mains),
            "alts" | "alt" => Ok(Self::Alts),
            _ => Err(DomainError::ValidationError(format!("Invalid rank filter: {s}"))),
        }
    }
}

/// Named extra predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialPredicate {
    MissingEnchants,
    MissingTier,
    HasPvpRating,
    HasMplusScore,
    LockedNormal,
    LockedHeroic,
    LockedMythic,
    NotLocked,
    /// Unrecognized name; matches everything
    Other(String),
}

impl SpecialPredicate {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "missing-enchants" => Self::MissingEnchants,
            "missing-tier" => Self::MissingTier,
            "has-pvp-rating" => Self::HasPvpRating,
            "has-mplus-score" => Self::HasMplusScore,
            "locked-normal" => Self::LockedNormal,
            "locked-heroic" => Self::LockedHeroic,
            "locked-mythic" => Self::LockedMythic,
            "not-locked" => Self::NotLocked,
            _ => Self::Other(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::MissingEnchants => "missing-enchants",
            Self::MissingTier => "missing-tier",
            Self::HasPvpRating => "has-pvp-rating",
            Self::HasMplusScore => "has-mplus-score",
            Self::LockedNormal => "locked-normal",
            Self::LockedHeroic => "locked-heroic",
            Self::LockedMythic => "locked-mythic",
            Self::NotLocked => "not-locked",
            Self::Other(name) => name,
        }
    }

    pub fn holds_for(&self, member: &Member) -> bool {
        match self {
            Self::MissingEnchants => member.is_missing_enchants(),
            Self::MissingTier => !member.has_tier_set,
            Self::HasPvpRating => member.pvp_rating > 0,
            Self::HasMplusScore => member.mplus_rating > 0.0,
            Self::LockedNormal => evaluate_lockout(&member.lockout_progress).is_locked_on("Normal"),
            Self::LockedHeroic => evaluate_lockout(&member.lockout_progress).is_locked_on("Heroic"),
            Self::LockedMythic => evaluate_lockout(&member.lockout_progress).is_locked_on("Mythic"),
            Self::NotLocked => !evaluate_lockout(&member.lockout_progress).is_locked,
            Self::Other(_) => true,
        }
    }
}

impl fmt::Display for SpecialPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable filter over roster members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub rank: RankSelector,
    pub classes: BTreeSet<PlayableClass>,
    /// `None` accepts every role
    pub role: Option<Role>,
    pub min_item_level: u32,
    pub special: Option<SpecialPredicate>,
}

impl FilterCriteria {
    /// Criteria that match every member
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    #[must_use]
    pub fn rank(mut self, rank: RankSelector) -> Self {
        self.rank = rank;
        self
    }

    #[must_use]
    pub fn classes(mut self, classes: impl IntoIterator<Item = PlayableClass>) -> Self {
        self.classes = classes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn min_item_level(mut self, min_item_level: u32) -> Self {
        self.min_item_level = min_item_level;
        self
    }

    #[must_use]
    pub fn special(mut self, name: &str) -> Self {
        self.special = Some(SpecialPredicate::parse(name));
        self
    }

    /// Build criteria from raw query parameters
    ///
    /// Blank entries in the comma-separated class list are skipped.
    ///
    /// # Errors
    /// Returns `DomainError::ValidationError` for an unrecognized rank or role
    /// selector, `DomainError::UnknownClass` for an unrecognized class name
    pub fn from_query(query: &MemberQuery) -> Result<Self, DomainError> {
        let rank = match query.rank.as_deref() {
            Some(raw) => raw.parse()?,
            None => RankSelector::All,
        };

        let role = match query.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.eq_ignore_ascii_case("all") => None,
            Some(raw) => Some(raw.parse::<Role>()?),
        };

        let classes = match query.classes.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::parse::<PlayableClass>)
                .collect::<Result<BTreeSet<_>, _>>()?,
            None => BTreeSet::new(),
        };

        let special = query
            .special
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(SpecialPredicate::parse);

        Ok(Self {
            search: query.search.clone().unwrap_or_default(),
            rank,
            classes,
            role,
            min_item_level: query.min_item_level.unwrap_or_default(),
            special,
        })
    }
}

/// Check a member against every criterion
pub fn matches(
    member: &Member,
    criteria: &FilterCriteria,
    ranks: &RankConfig,
    resolver: &RoleResolver,
) -> bool {
    if !criteria.rank.accepts(member.guild_rank_index, ranks) {
        return false;
    }

    let needle = &criteria.search;
    if !needle.is_empty() && !member.name.to_lowercase().contains(&needle.to_lowercase()) {
        return false;
    }

    if !criteria.classes.is_empty() && !criteria.classes.contains(&member.class) {
        return false;
    }

    if criteria
        .role
        .is_some_and(|role| resolver.role_of(member) != role)
    {
        return false;
    }

    if member.item_level < criteria.min_item_level {
        return false;
    }

    criteria
        .special
        .as_ref()
        .is_none_or(|predicate| predicate.holds_for(member))
}

/// Members matching `criteria`, in input order
pub fn filter_members<'m>(
    members: &'m [Member],
    criteria: &FilterCriteria,
    ranks: &RankConfig,
    resolver: &RoleResolver,
) -> Vec<&'m Member> {
    members
        .iter()
        .filter(|member| matches(member, criteria, ranks, resolver))
        .collect()
}
