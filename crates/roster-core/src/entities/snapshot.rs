//! Roster snapshot - one complete load of member records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::Member;

/// Immutable point-in-time roster as delivered by the data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub members: Vec<Member>,
    pub fetched_at: DateTime<Utc>,
}

impl RosterSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            fetched_at: Utc::now(),
        }
    }

    /// A snapshot that carries no data yet
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Find a member by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.is_named(name))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::PlayableClass;

    #[test]
    fn test_find_is_case_insensitive() {
        let snapshot = RosterSnapshot::new(vec![
            Member::new("Alice", PlayableClass::Mage, "Fire", 0),
            Member::new("Bob", PlayableClass::Warrior, "Protection", 1),
        ]);
        assert_eq!(snapshot.find("bob").map(|m| m.class), Some(PlayableClass::Warrior));
        assert!(snapshot.find("Carol").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = RosterSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
