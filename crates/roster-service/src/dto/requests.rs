//! Request DTOs for API endpoints
//!
//! Query strings and bodies are deserialized as raw strings and numbers;
//! the services parse selectors so unknown values map to domain errors.

use serde::Deserialize;
use validator::Validate;

/// Default page size for member listings
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Maximum page size for member listings
pub const MAX_PAGE_SIZE: u32 = 200;
/// Default leaderboard length
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 10;

// ============================================================================
// Member Queries
// ============================================================================

/// Member search and filter parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MemberQuery {
    #[validate(length(max = 64, message = "Search text must be at most 64 characters"))]
    pub search: Option<String>,

    /// `all`, `mains` or `alts`
    pub rank: Option<String>,

    /// Comma-separated class names
    pub classes: Option<String>,

    /// `all`, `tanks`, `healers` or `dps`
    pub role: Option<String>,

    pub min_item_level: Option<u32>,

    /// Named special predicate, e.g. `missing-enchants`
    pub special: Option<String>,

    pub page: Option<u32>,

    #[validate(range(min = 1, max = 200, message = "Page size must be 1-200"))]
    pub page_size: Option<u32>,
}

impl MemberQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1) as usize
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as usize
    }
}

// ============================================================================
// Aggregation Queries
// ============================================================================

/// Leaderboard parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LeaderboardQuery {
    #[validate(range(min = 1, max = 100, message = "Leaderboard size must be 1-100"))]
    pub n: Option<u32>,

    /// `all`, `mains` or `alts`
    pub rank: Option<String>,
}

impl LeaderboardQuery {
    pub fn size(&self) -> usize {
        self.n.unwrap_or(DEFAULT_LEADERBOARD_SIZE) as usize
    }
}

/// Overview parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StatsQuery {
    pub rank: Option<String>,
}

// ============================================================================
// Roster Requests
// ============================================================================

/// Move a member into a roster bucket
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignMemberRequest {
    #[validate(length(min = 1, max = 32, message = "Bucket must be 1-32 characters"))]
    pub bucket: String,
}
