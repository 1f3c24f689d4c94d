//! Buff coverage
//!
//! Counts how many raid members provide each tracked buff, driven by the
//! configured class → buff table.

use std::collections::BTreeMap;

use roster_common::BuffTable;
use roster_core::{Buff, PlayableClass, Role, RosterAssignment, RosterSnapshot};
use serde::Serialize;

/// One raider contributing to coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuffEntry {
    /// Class name as written upstream; unrecognized names contribute nothing
    pub class: String,
    pub primary_role: Role,
}

impl BuffEntry {
    pub fn new(class: impl Into<String>, primary_role: Role) -> Self {
        Self {
            class: class.into(),
            primary_role,
        }
    }
}

/// Buff → provider count, every tracked buff present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuffCoverage {
    counts: BTreeMap<Buff, u32>,
}

impl Default for BuffCoverage {
    fn default() -> Self {
        Self {
            counts: Buff::ALL.into_iter().map(|buff| (buff, 0)).collect(),
        }
    }
}

impl BuffCoverage {
    pub fn count(&self, buff: Buff) -> u32 {
        self.counts.get(&buff).copied().unwrap_or_default()
    }

    pub fn is_covered(&self, buff: Buff) -> bool {
        self.count(buff) > 0
    }

    /// Buffs nobody provides, in canonical order
    pub fn missing(&self) -> Vec<Buff> {
        self.counts
            .iter()
            .filter(|(_, &count)| count == 0)
            .map(|(&buff, _)| buff)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Buff, u32)> + '_ {
        self.counts.iter().map(|(&buff, &count)| (buff, count))
    }

    fn increment(&mut self, buff: Buff) {
        *self.counts.entry(buff).or_default() += 1;
    }
}

/// Count buff providers among `entries`
pub fn calculate_buff_coverage(table: &BuffTable, entries: &[BuffEntry]) -> BuffCoverage {
    let mut coverage = BuffCoverage::default();

    for entry in entries {
        let Ok(class) = entry.class.parse::<PlayableClass>() else {
            continue;
        };

        for rule in table.rules_for(class) {
            if rule.applies_to(entry.primary_role) {
                coverage.increment(rule.buff);
            }
        }
    }

    coverage
}

/// Join the raiding buckets with the snapshot to produce coverage entries
///
/// The bucket decides the primary role. Substitutes and socials are not in
/// the raid, and assigned names missing from the snapshot are skipped.
pub fn build_buff_entries(
    assignment: &RosterAssignment,
    snapshot: &RosterSnapshot,
) -> Vec<BuffEntry> {
    assignment
        .iter()
        .filter_map(|(bucket, names)| bucket.primary_role().map(|role| (role, names)))
        .flat_map(|(role, names)| {
            names.iter().filter_map(move |name| {
                snapshot
                    .find(name)
                    .map(|member| BuffEntry::new(member.class.name(), role))
            })
        })
        .collect()
}
