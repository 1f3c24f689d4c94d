//! Stats service
//!
//! Leaderboards and the dashboard overview.

use roster_core::Member;
use tracing::instrument;
use validator::Validate;

use crate::dto::{LeaderboardEntry, LeaderboardQuery, LeaderboardResponse, SnapshotInfo, StatsQuery, StatsResponse};
use crate::engine::{top_n, FilterCriteria, RankSelector, ScoreKey};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Top members by `score`, optionally restricted to mains or alts
    #[instrument(skip(self))]
    pub fn leaderboard(&self, score: &str, query: &LeaderboardQuery) -> ServiceResult<LeaderboardResponse> {
        query
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let key: ScoreKey = score.parse()?;
        let rank = parse_rank(query.rank.as_deref())?;

        let snapshot = self.ctx.snapshots().current();
        let members = self.ranked_members(&snapshot.members, rank);

        let entries = top_n(&members, key, query.size())
            .into_iter()
            .enumerate()
            .map(|(index, member)| LeaderboardEntry {
                position: index + 1,
                name: member.name.clone(),
                class: member.class,
                specialization: member.specialization.clone(),
                score: key.score(member),
            })
            .collect();

        Ok(LeaderboardResponse {
            snapshot: SnapshotInfo::from(snapshot.as_ref()),
            score: key,
            entries,
        })
    }

    #[instrument(skip(self))]
    pub fn overview(&self, query: &StatsQuery) -> ServiceResult<StatsResponse> {
        let rank = parse_rank(query.rank.as_deref())?;
        let snapshot = self.ctx.snapshots().current();
        let members = self.ranked_members(&snapshot.members, rank);

        Ok(StatsResponse {
            snapshot: SnapshotInfo::from(snapshot.as_ref()),
            overview: self.ctx.engine().overview(&members),
        })
    }

    fn ranked_members(&self, members: &[Member], rank: RankSelector) -> Vec<Member> {
        let criteria = FilterCriteria::new().rank(rank);
        self.ctx
            .engine()
            .filter_members(members, &criteria)
            .into_iter()
            .cloned()
            .collect()
    }
}

fn parse_rank(raw: Option<&str>) -> ServiceResult<RankSelector> {
    Ok(raw.map(str::parse).transpose()?.unwrap_or_default())
}
