//! Member entity - one roster entry from the upstream snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::serde_util::{lenient, lenient_f64, lenient_string_set, lenient_u32};
use crate::value_objects::{LockoutProgress, PlayableClass};

/// Roster member as supplied by the data provider
///
/// Optional fields are defaulted once, here, when the snapshot is decoded:
/// engine code never has to deal with missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub class: PlayableClass,
    #[serde(default, deserialize_with = "lenient")]
    pub specialization: String,
    pub guild_rank_index: u8,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub item_level: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mplus_rating: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub pvp_rating: u32,
    #[serde(default, deserialize_with = "lenient_string_set")]
    pub missing_enchant_slots: BTreeSet<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_tier_set: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub lockout_progress: LockoutProgress,
    #[serde(default, deserialize_with = "lenient")]
    pub media_asset_ref: Option<String>,
}

impl Member {
    /// Create a member with every optional attribute at its default
    pub fn new(
        name: impl Into<String>,
        class: PlayableClass,
        specialization: impl Into<String>,
        guild_rank_index: u8,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            specialization: specialization.into(),
            guild_rank_index,
            item_level: 0,
            mplus_rating: 0.0,
            pvp_rating: 0,
            missing_enchant_slots: BTreeSet::new(),
            has_tier_set: false,
            lockout_progress: LockoutProgress::default(),
            media_asset_ref: None,
        }
    }

    /// Case-insensitive name comparison
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Check if the specialization belongs to the member's class
    pub fn has_known_specialization(&self) -> bool {
        self.class.has_specialization(&self.specialization)
    }

    #[inline]
    pub fn is_missing_enchants(&self) -> bool {
        !self.missing_enchant_slots.is_empty()
    }
}

/// Compare two member names the way the roster does (Unicode case-insensitive)
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
