pub mod config;
pub mod error;
pub mod types;

pub use config::CalculatorConfig;
pub use error::{CalcError, Result};
pub use types::{LockSet, OffensiveSample, Skill, SkillSet, DEFAULT_LEVEL};
