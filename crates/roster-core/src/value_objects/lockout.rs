//! Raid lockout progress value objects
//!
//! A member's lockout progress is an *ordered* mapping from difficulty name to
//! encounter progress. The order is the order the upstream provider listed the
//! difficulties in, so it is kept as a vector of pairs rather than a hash map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::serde_util::{lenient_string_list, lenient_u32};

/// Encounter progress for a single raid difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyProgress {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub completed_encounters: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_encounters: u32,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub encounter_names: Vec<String>,
}

impl DifficultyProgress {
    pub fn new(completed: u32, total: u32, encounter_names: Vec<String>) -> Self {
        Self {
            completed_encounters: completed,
            total_encounters: total,
            encounter_names,
        }
    }

    /// A difficulty is locked once at least one encounter has been defeated
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.completed_encounters > 0
    }
}

/// Ordered difficulty → progress mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockoutProgress {
    entries: Vec<(String, DifficultyProgress)>,
}

impl LockoutProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace progress for a difficulty, keeping first-seen order
    pub fn insert(&mut self, difficulty: impl Into<String>, progress: DifficultyProgress) {
        let difficulty = difficulty.into();
        match self.entries.iter_mut().find(|(name, _)| *name == difficulty) {
            Some((_, existing)) => *existing = progress,
            None => self.entries.push((difficulty, progress)),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, difficulty: impl Into<String>, progress: DifficultyProgress) -> Self {
        self.insert(difficulty, progress);
        self
    }

    /// Look up a difficulty by name (ASCII case-insensitive)
    pub fn get(&self, difficulty: &str) -> Option<&DifficultyProgress> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(difficulty))
            .map(|(_, progress)| progress)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DifficultyProgress)> {
        self.entries.iter().map(|(name, progress)| (name.as_str(), progress))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, DifficultyProgress)> for LockoutProgress {
    fn from_iter<I: IntoIterator<Item = (S, DifficultyProgress)>>(iter: I) -> Self {
        let mut progress = Self::new();
        for (difficulty, entry) in iter {
            progress.insert(difficulty, entry);
        }
        progress
    }
}

impl Serialize for LockoutProgress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (difficulty, progress) in &self.entries {
            map.serialize_entry(difficulty, progress)?;
        }
        map.end()
    }
}

// Visits map entries in document order so difficulty order survives decoding
impl<'de> Deserialize<'de> for LockoutProgress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LockoutVisitor;

        impl<'de> Visitor<'de> for LockoutVisitor {
            type Value = LockoutProgress;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of difficulty name to encounter progress")
            }

            fn visit_map<A>(self, mut access: A) -> Result<LockoutProgress, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut progress = LockoutProgress::new();
                while let Some((difficulty, entry)) =
                    access.next_entry::<String, DifficultyProgress>()?
                {
                    progress.insert(difficulty, entry);
                }
                Ok(progress)
            }
        }

        deserializer.deserialize_map(LockoutVisitor)
    }
}
