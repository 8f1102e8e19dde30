//! Skill selection after an offensive-level inference
//!
//! The user is offered strength, ranged or magic as the home for the
//! inferred level, or may cancel. Nothing is written until they answer.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::core::error::{CalcError, Result};
use crate::core::types::{Skill, SkillSet};

/// The skills an inferred offensive level can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillChoice {
    Strength,
    Ranged,
    Magic,
}

impl SkillChoice {
    pub const ALL: [SkillChoice; 3] = [SkillChoice::Strength, SkillChoice::Ranged, SkillChoice::Magic];

    pub fn skill(self) -> Skill {
        match self {
            SkillChoice::Strength => Skill::Strength,
            SkillChoice::Ranged => Skill::Ranged,
            SkillChoice::Magic => Skill::Magic,
        }
    }
}

impl From<SkillChoice> for Skill {
    fn from(choice: SkillChoice) -> Self {
        choice.skill()
    }
}

impl fmt::Display for SkillChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.skill(), f)
    }
}

impl FromStr for SkillChoice {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let skill: Skill = s.parse()?;
        SkillChoice::ALL
            .into_iter()
            .find(|choice| choice.skill() == skill)
            .ok_or_else(|| CalcError::UnknownSkill(s.to_string()))
    }
}

/// Blocking request for the user's pick; `None` means cancelled
pub trait SkillPrompt {
    fn choose(&mut self, inferred_level: f64) -> Option<SkillChoice>;
}

/// A prompt whose answer is known up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice(pub Option<SkillChoice>);

impl SkillPrompt for FixedChoice {
    fn choose(&mut self, _inferred_level: f64) -> Option<SkillChoice> {
        self.0
    }
}

/// Line-oriented prompt over any reader/writer pair
///
/// Accepts a skill name or its menu number; an empty line, "cancel",
/// end of input, or any unrecognized answer cancels.
pub struct StdinPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, inferred_level: f64) -> std::io::Result<Option<SkillChoice>> {
        writeln!(
            self.writer,
            "Inferred level {:.2}. Assign it to which skill?",
            inferred_level
        )?;
        for (i, choice) in SkillChoice::ALL.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice)?;
        }
        write!(self.writer, "Choice (blank to cancel): ")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(parse_answer(&line))
    }
}

impl<R: BufRead, W: Write> SkillPrompt for StdinPrompt<R, W> {
    fn choose(&mut self, inferred_level: f64) -> Option<SkillChoice> {
        match self.ask(inferred_level) {
            Ok(choice) => choice,
            Err(e) => {
                tracing::warn!("skill prompt failed, treating as cancel: {}", e);
                None
            }
        }
    }
}

fn parse_answer(line: &str) -> Option<SkillChoice> {
    let answer = line.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| SkillChoice::ALL.get(i).copied());
    }
    answer.parse().ok()
}

/// Ask where `level` should go and write it there
///
/// Returns the skill that was updated, or `None` if the user cancelled, in
/// which case `skills` is unchanged.
pub fn assign_inferred_level(
    skills: &mut SkillSet,
    prompt: &mut dyn SkillPrompt,
    level: f64,
) -> Option<Skill> {
    let skill = prompt.choose(level)?.skill();
    skills.set(skill, level);
    tracing::info!(%skill, level, "assigned inferred level");
    Some(skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_choice_maps_to_skill() {
        assert_eq!(Skill::from(SkillChoice::Ranged), Skill::Ranged);
        assert_eq!("magic".parse::<SkillChoice>().unwrap(), SkillChoice::Magic);
        assert!("attack".parse::<SkillChoice>().is_err());
    }

    #[test]
    fn test_assign_sets_chosen_field() {
        let mut skills = SkillSet::default();
        let mut prompt = FixedChoice(Some(SkillChoice::Strength));
        let assigned = assign_inferred_level(&mut skills, &mut prompt, 72.5);

        assert_eq!(assigned, Some(Skill::Strength));
        assert_eq!(skills.get(Skill::Strength), 72.5);
    }

    #[test]
    fn test_cancel_leaves_skills_untouched() {
        let mut skills = SkillSet::default().with(Skill::Magic, 40.0);
        let before = skills;
        let assigned = assign_inferred_level(&mut skills, &mut FixedChoice(None), 80.0);

        assert!(assigned.is_none());
        assert_eq!(skills, before);
    }

    #[test]
    fn test_stdin_prompt_accepts_number_and_name() {
        let mut out = Vec::new();
        let mut prompt = StdinPrompt::new(Cursor::new("2\n"), &mut out);
        assert_eq!(prompt.choose(50.0), Some(SkillChoice::Ranged));

        let mut prompt = StdinPrompt::new(Cursor::new("Magic\n"), Vec::new());
        assert_eq!(prompt.choose(50.0), Some(SkillChoice::Magic));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Inferred level 50.00"));
        assert!(text.contains("1) Strength"));
    }

    #[test]
    fn test_stdin_prompt_cancels() {
        for input in ["\n", "cancel\n", "", "4\n", "0\n"] {
            let mut prompt = StdinPrompt::new(Cursor::new(input), Vec::new());
            assert_eq!(prompt.choose(10.0), None, "input {:?}", input);
        }
    }
}
