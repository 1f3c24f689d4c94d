//! Roster assignment entity - hand-curated member → bucket mapping

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::member::names_match;
use crate::value_objects::RoleBucket;

/// Curated roster: every bucket with the member names assigned to it
///
/// Invariant: a name (compared case-insensitively) appears in at most one
/// bucket. Every bucket key is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RosterAssignment {
    buckets: BTreeMap<RoleBucket, Vec<String>>,
}

impl Default for RosterAssignment {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterAssignment {
    /// Create an assignment with all buckets empty
    pub fn new() -> Self {
        Self {
            buckets: RoleBucket::ALL.iter().map(|&b| (b, Vec::new())).collect(),
        }
    }

    /// Build from persisted bucket lists.
    ///
    /// Buckets are applied in canonical order, so if persisted state lists a
    /// name twice the later bucket wins, the same as replaying `assign` calls.
    pub fn from_buckets<I, N>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (RoleBucket, Vec<N>)>,
        N: Into<String>,
    {
        let mut ordered: BTreeMap<RoleBucket, Vec<String>> = BTreeMap::new();
        for (bucket, names) in buckets {
            ordered
                .entry(bucket)
                .or_default()
                .extend(names.into_iter().map(Into::into));
        }

        let mut assignment = Self::new();
        for (bucket, names) in ordered {
            for name in names {
                assignment.assign(name, bucket);
            }
        }
        assignment
    }

    /// Move a member into `bucket`, removing it from any other bucket first.
    ///
    /// Returns the bucket the member was previously in.
    pub fn assign(&mut self, name: impl Into<String>, bucket: RoleBucket) -> Option<RoleBucket> {
        let name = name.into();
        let previous = self.remove(&name);
        self.bucket_mut(bucket).push(name);
        previous
    }

    /// Remove a member from every bucket. Removing an unassigned member is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<RoleBucket> {
        let mut previous = None;
        for (bucket, names) in &mut self.buckets {
            let before = names.len();
            names.retain(|existing| !names_match(existing, name));
            if names.len() != before {
                previous = Some(*bucket);
            }
        }
        previous
    }

    /// Find the bucket a member is assigned to
    pub fn bucket_of(&self, name: &str) -> Option<RoleBucket> {
        self.buckets
            .iter()
            .find(|(_, names)| names.iter().any(|n| names_match(n, name)))
            .map(|(bucket, _)| *bucket)
    }

    /// Names in a bucket, in assignment order
    pub fn members(&self, bucket: RoleBucket) -> &[String] {
        // Every bucket is inserted by `new`; a missing key is a broken invariant.
        &self.buckets[&bucket]
    }

    /// Iterate buckets in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (RoleBucket, &[String])> {
        self.buckets.iter().map(|(bucket, names)| (*bucket, names.as_slice()))
    }

    /// Total number of assigned members
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, bucket: RoleBucket) -> &mut Vec<String> {
        self.buckets
            .get_mut(&bucket)
            .expect("roster assignment is missing a bucket")
    }
}

impl<'de> Deserialize<'de> for RosterAssignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<Vec<String>>>::deserialize(deserializer)?;
        let mut buckets = Vec::with_capacity(raw.len());
        for (key, names) in raw {
            let bucket = key.parse::<RoleBucket>().map_err(D::Error::custom)?;
            buckets.push((bucket, names.unwrap_or_default()));
        }
        Ok(Self::from_buckets(buckets))
    }
}
