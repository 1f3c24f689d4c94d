//! Aggregation and leaderboards

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use roster_common::RankConfig;
use roster_core::{DomainError, Member, PlayableClass, Role};
use serde::Serialize;

use super::filter::SpecialPredicate;
use super::role::RoleResolver;

/// Numeric attribute members can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreKey {
    Mplus,
    Pvp,
    ItemLevel,
}

impl ScoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mplus => "mplus",
            Self::Pvp => "pvp",
            Self::ItemLevel => "item-level",
        }
    }

    pub fn score(&self, member: &Member) -> f64 {
        match self {
            Self::Mplus => member.mplus_rating,
            Self::Pvp => f64::from(member.pvp_rating),
            Self::ItemLevel => f64::from(member.item_level),
        }
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mplus" | "mythic-plus" => Ok(Self::Mplus),
            "pvp" => Ok(Self::Pvp),
            "item-level" | "ilvl" => Ok(Self::ItemLevel),
            _ => Err(DomainError::UnknownScoreKey(s.to_string())),
        }
    }
}

/// Top `n` members by score, descending
///
/// Ties keep input order; NaN scores sort last.
pub fn top_n<'m>(members: &'m [Member], key: ScoreKey, n: usize) -> Vec<&'m Member> {
    let mut ranked: Vec<&Member> = members.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| compare_desc(key.score(a), key.score(b)));
    ranked.truncate(n);
    ranked
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

pub fn count_by<F>(members: &[Member], predicate: F) -> usize
where
    F: Fn(&Member) -> bool,
{
    members.iter().filter(|m| predicate(m)).count()
}

/// Mean score; 0 for an empty slice
pub fn average(members: &[Member], key: ScoreKey) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: f64 = members.iter().map(|m| key.score(m)).sum();
    total / members.len() as f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub tanks: usize,
    pub healers: usize,
    pub dps: usize,
}

pub fn role_counts(members: &[Member], resolver: &RoleResolver) -> RoleCounts {
    members
        .iter()
        .fold(RoleCounts::default(), |mut counts, member| {
            match resolver.role_of(member) {
                Role::Tank => counts.tanks += 1,
                Role::Healer => counts.healers += 1,
                Role::Dps => counts.dps += 1,
            }
            counts
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissingEnchantCounts {
    pub all: usize,
    pub mains: usize,
    pub alts: usize,
}

/// Members with at least one unenchanted slot, split by rank category
///
/// Ranks in neither configured set only count towards `all`.
pub fn missing_enchant_counts(members: &[Member], ranks: &RankConfig) -> MissingEnchantCounts {
    members
        .iter()
        .filter(|m| m.is_missing_enchants())
        .fold(MissingEnchantCounts::default(), |mut counts, member| {
            counts.all += 1;
            if ranks.is_main(member.guild_rank_index) {
                counts.mains += 1;
            } else if ranks.is_alt(member.guild_rank_index) {
                counts.alts += 1;
            }
            counts
        })
}

/// Member count per class, every class present
pub fn class_counts(members: &[Member]) -> BTreeMap<PlayableClass, usize> {
    let mut counts: BTreeMap<PlayableClass, usize> =
        PlayableClass::ALL.into_iter().map(|class| (class, 0)).collect();
    for member in members {
        *counts.entry(member.class).or_default() += 1;
    }
    counts
}

/// Dashboard summary of a member set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterOverview {
    pub total_members: usize,
    pub roles: RoleCounts,
    pub average_item_level: f64,
    pub average_mplus_rating: f64,
    pub average_pvp_rating: f64,
    pub tier_set_count: usize,
    pub locked_heroic_count: usize,
    pub missing_enchants: MissingEnchantCounts,
    pub unknown_specialization_count: usize,
    pub classes: BTreeMap<String, usize>,
}

pub fn roster_overview(
    members: &[Member],
    ranks: &RankConfig,
    resolver: &RoleResolver,
) -> RosterOverview {
    let locked_heroic = SpecialPredicate::LockedHeroic;

    RosterOverview {
        total_members: members.len(),
        roles: role_counts(members, resolver),
        average_item_level: average(members, ScoreKey::ItemLevel),
        average_mplus_rating: average(members, ScoreKey::Mplus),
        average_pvp_rating: average(members, ScoreKey::Pvp),
        tier_set_count: count_by(members, |m| m.has_tier_set),
        locked_heroic_count: count_by(members, |m| locked_heroic.holds_for(m)),
        missing_enchants: missing_enchant_counts(members, ranks),
        unknown_specialization_count: count_by(members, |m| !m.has_known_specialization()),
        classes: class_counts(members)
            .into_iter()
            .map(|(class, count)| (class.name().to_string(), count))
            .collect(),
    }
}
