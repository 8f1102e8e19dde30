//! One calculation request from the form, start to finish
//!
//! The shell gathers fields, locks and mode into a [`CalculationRequest`];
//! [`Calculator::run`] validates it, dispatches to the formula or the
//! search, and hands back an [`Outcome`] ready to display.

use serde::{Deserialize, Serialize};

use crate::core::config::CalculatorConfig;
use crate::core::error::{CalcError, Result};
use crate::core::types::{LockSet, OffensiveSample, Skill, SkillSet};
use crate::dialog::{assign_inferred_level, SkillPrompt};
use crate::formula::{calculate_offensive_level, combat_breakdown, CombatBreakdown};
use crate::search::{calculate_missing_levels, MissingLevels};

/// What the calculate button does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Combat level from the entered skills
    #[default]
    CombatLevel,
    /// Levels needed to reach the entered combat level
    MissingLevels,
    /// Skill level implied by a damage sample
    OffensiveLevel,
}

#[derive(Debug, Clone, Default)]
pub struct CalculationRequest {
    pub skills: SkillSet,
    pub locks: LockSet,
    pub mode: Mode,
    pub sample: OffensiveSample,
    pub aggressive: bool,
}

impl CalculationRequest {
    pub fn new(skills: SkillSet, mode: Mode) -> Self {
        Self {
            skills,
            mode,
            ..Default::default()
        }
    }

    pub fn with_locks(mut self, locks: LockSet) -> Self {
        self.locks = locks;
        self
    }

    pub fn with_sample(mut self, sample: OffensiveSample, aggressive: bool) -> Self {
        self.sample = sample;
        self.aggressive = aggressive;
        self
    }
}

/// Result of a calculation, one variant per kind of answer the form shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    CombatLevel {
        level: f64,
        breakdown: CombatBreakdown,
    },
    /// Current stats already meet the target
    AlreadyMet,
    Missing(MissingLevels),
    OffensiveLevel {
        level: f64,
        /// `None` when the user cancelled the skill selection
        assigned: Option<Skill>,
        /// Skills after the assignment (unchanged on cancel)
        skills: SkillSet,
    },
}

impl Outcome {
    /// Result text as shown under the calculate button
    pub fn render(&self, precision: usize) -> String {
        match self {
            Outcome::CombatLevel { level, .. } => {
                format!("Combat Level: {:.*}", precision, level)
            }
            Outcome::AlreadyMet => "You already have the required levels!".to_string(),
            Outcome::Missing(missing) => format!("Missing Levels:\n{}", missing),
            Outcome::OffensiveLevel {
                level, assigned, ..
            } => match assigned {
                Some(skill) => format!(
                    "Offensive Level: {:.*}\nAssigned to {}",
                    precision, level, skill
                ),
                None => format!("Offensive Level: {:.*}\nNo skill selected", precision, level),
            },
        }
    }
}

pub struct Calculator {
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Run a request
    ///
    /// The combat field is checked against the configured maximum before
    /// anything else, whatever the mode. `prompt` is consulted only in
    /// offensive-level mode.
    pub fn run(&self, request: &CalculationRequest, prompt: &mut dyn SkillPrompt) -> Result<Outcome> {
        let skills = &request.skills;
        if !skills.combat.is_finite() {
            return Err(CalcError::NonFiniteLevel {
                field: "combat".to_string(),
            });
        }
        if !(skills.combat <= self.config.max_combat_level) {
            tracing::warn!(requested = skills.combat, "combat level above maximum");
            return Err(CalcError::CombatLevelTooHigh {
                requested: skills.combat,
                max: self.config.max_combat_level,
            });
        }

        tracing::info!(mode = ?request.mode, "running calculation");

        match request.mode {
            Mode::CombatLevel => {
                let breakdown = combat_breakdown(skills);
                Ok(Outcome::CombatLevel {
                    level: breakdown.level,
                    breakdown,
                })
            }
            Mode::MissingLevels => {
                let missing = calculate_missing_levels(
                    skills,
                    &request.locks,
                    self.config.max_search_iterations,
                )?;
                Ok(missing.map_or(Outcome::AlreadyMet, Outcome::Missing))
            }
            Mode::OffensiveLevel => {
                let level = calculate_offensive_level(&request.sample, request.aggressive)?;
                let mut updated = *skills;
                let assigned = assign_inferred_level(&mut updated, prompt, level);
                Ok(Outcome::OffensiveLevel {
                    level,
                    assigned,
                    skills: updated,
                })
            }
        }
    }
}
