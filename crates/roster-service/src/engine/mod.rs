//! Read-path roster engine
//!
//! Pure, synchronous components over immutable inputs. [`RosterEngine`]
//! binds them to one [`EngineConfig`].

pub mod buffs;
pub mod filter;
pub mod leaderboard;
pub mod lockout;
pub mod pagination;
pub mod role;

pub use buffs::{build_buff_entries, calculate_buff_coverage, BuffCoverage, BuffEntry};
pub use filter::{filter_members, matches, FilterCriteria, RankSelector, SpecialPredicate};
pub use leaderboard::{
    average, class_counts, count_by, missing_enchant_counts, role_counts, roster_overview, top_n,
    MissingEnchantCounts, RoleCounts, RosterOverview, ScoreKey,
};
pub use lockout::{evaluate_lockout, DifficultySummary, LockoutSummary};
pub use pagination::{paginate, Page};
pub use role::RoleResolver;

use roster_common::EngineConfig;
use roster_core::{Member, Role, RosterAssignment, RosterSnapshot};

/// Engine components bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct RosterEngine {
    config: EngineConfig,
    resolver: RoleResolver,
}

impl RosterEngine {
    pub fn new(config: EngineConfig) -> Self {
        let resolver = RoleResolver::new(config.specs.clone());
        Self { config, resolver }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &RoleResolver {
        &self.resolver
    }

    pub fn resolve_role(&self, specialization: &str) -> Role {
        self.resolver.resolve(specialization)
    }

    pub fn matches(&self, member: &Member, criteria: &FilterCriteria) -> bool {
        matches(member, criteria, &self.config.ranks, &self.resolver)
    }

    pub fn filter_members<'m>(
        &self,
        members: &'m [Member],
        criteria: &FilterCriteria,
    ) -> Vec<&'m Member> {
        filter_members(members, criteria, &self.config.ranks, &self.resolver)
    }

    pub fn role_counts(&self, members: &[Member]) -> RoleCounts {
        role_counts(members, &self.resolver)
    }

    pub fn missing_enchant_counts(&self, members: &[Member]) -> MissingEnchantCounts {
        missing_enchant_counts(members, &self.config.ranks)
    }

    pub fn overview(&self, members: &[Member]) -> RosterOverview {
        roster_overview(members, &self.config.ranks, &self.resolver)
    }

    pub fn buff_coverage(&self, entries: &[BuffEntry]) -> BuffCoverage {
        calculate_buff_coverage(&self.config.buff_table, entries)
    }

    /// Coverage of the raiding buckets of `assignment`
    pub fn assignment_coverage(
        &self,
        assignment: &RosterAssignment,
        snapshot: &RosterSnapshot,
    ) -> BuffCoverage {
        self.buff_coverage(&build_buff_entries(assignment, snapshot))
    }
}
