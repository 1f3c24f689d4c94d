//! Lockout evaluation
//!
//! Turns a member's per-difficulty progress into a readiness summary with
//! display strings for dashboards.

use roster_core::{DifficultyProgress, LockoutProgress};
use serde::Serialize;

/// Display projection of one difficulty's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultySummary {
    pub difficulty: String,
    pub completed: u32,
    pub total: u32,
    pub encounter_names: Vec<String>,
    /// `"<Difficulty>: <completed>/<total>"`
    pub display_text: String,
    /// Encounter names joined with `", "`, or `"No encounters"`
    pub tooltip: String,
}

impl DifficultySummary {
    fn new(difficulty: &str, progress: &DifficultyProgress) -> Self {
        let tooltip = if progress.encounter_names.is_empty() {
            "No encounters".to_string()
        } else {
            progress.encounter_names.join(", ")
        };

        Self {
            difficulty: difficulty.to_string(),
            completed: progress.completed_encounters,
            total: progress.total_encounters,
            encounter_names: progress.encounter_names.clone(),
            display_text: format!(
                "{difficulty}: {}/{}",
                progress.completed_encounters, progress.total_encounters
            ),
            tooltip,
        }
    }
}

/// Derived lockout state for one member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LockoutSummary {
    pub is_locked: bool,
    pub locked_difficulties: Vec<String>,
    pub summary: String,
    pub tooltip: String,
    pub progress: Vec<DifficultySummary>,
}

impl LockoutSummary {
    /// Check whether a difficulty is locked (ASCII case-insensitive)
    pub fn is_locked_on(&self, difficulty: &str) -> bool {
        self.locked_difficulties
            .iter()
            .any(|d| d.eq_ignore_ascii_case(difficulty))
    }
}

/// Evaluate lockout progress. Empty progress yields the unlocked default.
pub fn evaluate_lockout(progress: &LockoutProgress) -> LockoutSummary {
    if progress.is_empty() {
        return LockoutSummary::default();
    }

    let locked: Vec<(&str, &DifficultyProgress)> =
        progress.iter().filter(|(_, p)| p.is_locked()).collect();

    let locked_difficulties: Vec<String> =
        locked.iter().map(|(name, _)| (*name).to_string()).collect();

    let tooltip = locked
        .iter()
        .map(|(name, p)| {
            let mut block = format!("{name} ({}/{})", p.completed_encounters, p.total_encounters);
            for encounter in &p.encounter_names {
                block.push('\n');
                block.push_str(encounter);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    LockoutSummary {
        is_locked: !locked_difficulties.is_empty(),
        summary: locked_difficulties.join(", "),
        locked_difficulties,
        tooltip,
        progress: progress
            .iter()
            .map(|(name, p)| DifficultySummary::new(name, p))
            .collect(),
    }
}
