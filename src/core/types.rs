//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::error::CalcError;

/// Level a field holds before the user types anything
pub const DEFAULT_LEVEL: f64 = 1.0;

/// The seven skills that feed the combat formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Attack,
    Strength,
    Defence,
    Hitpoints,
    Prayer,
    Ranged,
    Magic,
}

impl Skill {
    pub const ALL: [Skill; 7] = [
        Skill::Attack,
        Skill::Strength,
        Skill::Defence,
        Skill::Hitpoints,
        Skill::Prayer,
        Skill::Ranged,
        Skill::Magic,
    ];

    /// Lowercase field name
    pub fn name(&self) -> &'static str {
        match self {
            Skill::Attack => "attack",
            Skill::Strength => "strength",
            Skill::Defence => "defence",
            Skill::Hitpoints => "hitpoints",
            Skill::Prayer => "prayer",
            Skill::Ranged => "ranged",
            Skill::Magic => "magic",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Skill::Attack => "Attack",
            Skill::Strength => "Strength",
            Skill::Defence => "Defence",
            Skill::Hitpoints => "Hitpoints",
            Skill::Prayer => "Prayer",
            Skill::Ranged => "Ranged",
            Skill::Magic => "Magic",
        };
        f.write_str(label)
    }
}

impl FromStr for Skill {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::UnknownSkill(s.to_string()))
    }
}

/// Skill levels plus the combat field
///
/// `combat` is the search target in missing-level mode and is ignored when
/// computing a combat level directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    levels: [f64; 7],
    pub combat: f64,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            levels: [DEFAULT_LEVEL; 7],
            combat: DEFAULT_LEVEL,
        }
    }
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> f64 {
        self.levels[skill.index()]
    }

    pub fn set(&mut self, skill: Skill, level: f64) {
        self.levels[skill.index()] = level;
    }

    /// Builder-style setter
    pub fn with(mut self, skill: Skill, level: f64) -> Self {
        self.set(skill, level);
        self
    }

    pub fn with_combat(mut self, combat: f64) -> Self {
        self.combat = combat;
        self
    }

    /// Iterate `(skill, level)` in skill order
    pub fn iter(&self) -> impl Iterator<Item = (Skill, f64)> + '_ {
        Skill::ALL.into_iter().map(move |skill| (skill, self.get(skill)))
    }
}

/// Skills the search is not allowed to raise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSet {
    locked: BTreeSet<Skill>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self, skill: Skill) {
        self.locked.insert(skill);
    }

    pub fn unlock(&mut self, skill: Skill) {
        self.locked.remove(&skill);
    }

    pub fn is_locked(&self, skill: Skill) -> bool {
        self.locked.contains(&skill)
    }

    /// Skills not locked, in skill order
    pub fn unlocked(&self) -> Vec<Skill> {
        Skill::ALL
            .into_iter()
            .filter(|skill| !self.is_locked(*skill))
            .collect()
    }
}

impl FromIterator<Skill> for LockSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        Self {
            locked: iter.into_iter().collect(),
        }
    }
}

/// An observed damage roll together with the gear's offensive bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffensiveSample {
    pub base_damage: f64,
    pub offensive_bonus: f64,
}

impl OffensiveSample {
    pub fn new(base_damage: f64, offensive_bonus: f64) -> Self {
        Self {
            base_damage,
            offensive_bonus,
        }
    }
}
