//! Combat Calc - combat level calculator and missing-level search

pub mod calculator;
pub mod core;
pub mod dialog;
pub mod formula;
pub mod input;
pub mod search;

pub use crate::calculator::{CalculationRequest, Calculator, Mode, Outcome};
pub use crate::core::{CalcError, CalculatorConfig, LockSet, OffensiveSample, Skill, SkillSet};
