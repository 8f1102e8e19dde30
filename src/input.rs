//! Turning form field text into numbers
//!
//! The form never rejects what the user typed: anything that is not a
//! finite number reads as 0.

use crate::core::error::{CalcError, Result};
use crate::core::types::{Skill, SkillSet};

/// Name of the field that carries the target combat level
pub const COMBAT_FIELD: &str = "combat";

/// Parse a level field, normalizing unusable text to 0
pub fn parse_level(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

impl SkillSet {
    /// Build a skill set from `(field name, text)` pairs
    ///
    /// Fields not supplied keep the default level of 1.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut skills = SkillSet::default();
        for (name, text) in fields {
            let level = parse_level(text);
            if name.eq_ignore_ascii_case(COMBAT_FIELD) {
                skills.combat = level;
                continue;
            }
            let skill: Skill = name
                .parse()
                .map_err(|_| CalcError::UnknownField(name.to_string()))?;
            skills.set(skill, level);
        }
        Ok(skills)
    }
}
