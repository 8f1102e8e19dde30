//! Missing-level search
//!
//! Raises every unlocked skill by one level per step until the combat
//! formula reaches the target. The result is a combination that works,
//! not the one with the fewest total level-ups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::error::{CalcError, Result};
use crate::core::types::{LockSet, Skill, SkillSet};
use crate::formula::calculate_combat_level;

/// Levels each unlocked skill must gain to reach the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingLevels {
    /// Positive deltas only; locked skills never appear
    pub deltas: BTreeMap<Skill, u32>,
    /// Number of uniform steps taken
    pub steps: u32,
    /// Combat level after applying every delta
    pub reached_level: f64,
}

impl MissingLevels {
    pub fn delta(&self, skill: Skill) -> u32 {
        self.deltas.get(&skill).copied().unwrap_or(0)
    }

    /// The original levels with every delta applied
    pub fn apply(&self, skills: &SkillSet) -> SkillSet {
        let mut raised = *skills;
        for (&skill, &delta) in &self.deltas {
            raised.set(skill, skills.get(skill) + f64::from(delta));
        }
        raised
    }
}

impl fmt::Display for MissingLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (skill, delta) in &self.deltas {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: +{}", skill, delta)?;
            first = false;
        }
        Ok(())
    }
}

/// Find the uniform increase that lifts `skills` to `skills.combat`
///
/// Returns `Ok(None)` when the current stats already meet the target.
/// Levels and target must be finite.
/// `skills` is left untouched; the search runs on a copy.
pub fn calculate_missing_levels(
    skills: &SkillSet,
    locks: &LockSet,
    max_iterations: u32,
) -> Result<Option<MissingLevels>> {
    let target = skills.combat;
    if !target.is_finite() {
        return Err(CalcError::NonFiniteLevel {
            field: "combat".to_string(),
        });
    }
    if let Some((skill, _)) = skills.iter().find(|(_, level)| !level.is_finite()) {
        return Err(CalcError::NonFiniteLevel {
            field: skill.name().to_string(),
        });
    }
    let unlocked = locks.unlocked();

    let mut computed = calculate_combat_level(skills);
    if computed >= target {
        tracing::debug!(computed, target, "target already met");
        return Ok(None);
    }

    if unlocked.is_empty() {
        return Err(CalcError::NoAdjustableSkills { target });
    }

    tracing::debug!(
        computed,
        target,
        unlocked = unlocked.len(),
        "searching for missing levels"
    );

    let mut working = *skills;
    let mut steps: u32 = 0;
    while computed < target {
        if steps >= max_iterations {
            return Err(CalcError::SearchExhausted {
                target,
                iterations: steps,
            });
        }
        for &skill in &unlocked {
            working.set(skill, working.get(skill) + 1.0);
        }
        steps += 1;
        computed = calculate_combat_level(&working);
    }

    let deltas = unlocked.into_iter().map(|skill| (skill, steps)).collect();

    tracing::debug!(steps, reached = computed, "search finished");
    Ok(Some(MissingLevels {
        deltas,
        steps,
        reached_level: computed,
    }))
}
