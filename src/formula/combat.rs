//! Combat level formula
//!
//! Combat is a shared defensive base plus the better of two offensive
//! styles: melee (attack + strength) or the stronger of ranged and magic.

use serde::{Deserialize, Serialize};

use crate::core::types::{Skill, SkillSet};

/// Weight of the defensive base (hitpoints, defence, half prayer)
pub const BASE_WEIGHT: f64 = 0.25;

/// Weight applied to the offensive contribution
pub const OFFENSE_WEIGHT: f64 = 0.325;

/// Which offensive style decided the combat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStyle {
    Melee,
    RangedMagic,
}

/// Intermediate terms of the combat formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatBreakdown {
    pub base: f64,
    pub melee: f64,
    pub ranged_or_magic: f64,
    pub level: f64,
    pub style: CombatStyle,
}

/// Ranged and magic count one and a half times, rounded down on the half
fn effective_style_level(level: f64) -> f64 {
    (level / 2.0).floor() + level
}

/// Compute every term of the combat formula
pub fn combat_breakdown(skills: &SkillSet) -> CombatBreakdown {
    let prayer_part = (skills.get(Skill::Prayer) / 2.0).floor();
    let base = BASE_WEIGHT
        * (skills.get(Skill::Hitpoints) + skills.get(Skill::Defence) + prayer_part);

    let melee = base + OFFENSE_WEIGHT * (skills.get(Skill::Attack) + skills.get(Skill::Strength));

    let magic_effective = effective_style_level(skills.get(Skill::Magic));
    let ranged_effective = effective_style_level(skills.get(Skill::Ranged));
    let ranged_or_magic = base + OFFENSE_WEIGHT * magic_effective.max(ranged_effective);

    let (level, style) = if melee >= ranged_or_magic {
        (melee, CombatStyle::Melee)
    } else {
        (ranged_or_magic, CombatStyle::RangedMagic)
    };

    CombatBreakdown {
        base,
        melee,
        ranged_or_magic,
        level,
        style,
    }
}

/// Combat level for a skill set; `combat` itself is ignored
pub fn calculate_combat_level(skills: &SkillSet) -> f64 {
    combat_breakdown(skills).level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fresh_character() {
        let skills = SkillSet::default().with(Skill::Hitpoints, 10.0);
        let breakdown = combat_breakdown(&skills);

        assert!(approx(breakdown.base, 2.75));
        assert!(approx(breakdown.melee, 3.4));
        assert!(approx(breakdown.ranged_or_magic, 3.075));
        assert_eq!(breakdown.style, CombatStyle::Melee);
        assert_eq!(format!("{:.2}", breakdown.level), "3.40");
    }

    #[test]
    fn test_prayer_counts_half_rounded_down() {
        let odd = SkillSet::default().with(Skill::Prayer, 43.0);
        let even = SkillSet::default().with(Skill::Prayer, 42.0);
        assert!(approx(
            calculate_combat_level(&odd),
            calculate_combat_level(&even)
        ));
    }

    #[test]
    fn test_magic_style_wins_when_higher() {
        let skills = SkillSet::default()
            .with(Skill::Hitpoints, 10.0)
            .with(Skill::Magic, 99.0);
        let breakdown = combat_breakdown(&skills);

        // floor(99 / 2) + 99 = 148
        assert!(approx(breakdown.ranged_or_magic, 2.75 + 0.325 * 148.0));
        assert_eq!(breakdown.style, CombatStyle::RangedMagic);
        assert!(approx(breakdown.level, breakdown.ranged_or_magic));
    }

    #[test]
    fn test_combat_field_is_ignored() {
        let skills = SkillSet::default().with(Skill::Attack, 50.0);
        let with_target = skills.with_combat(9_999.0);
        assert_eq!(
            calculate_combat_level(&skills),
            calculate_combat_level(&with_target)
        );
    }

    #[test]
    fn test_maxed_character() {
        let skills = Skill::ALL
            .into_iter()
            .fold(SkillSet::default(), |set, skill| set.with(skill, 99.0));
        // base = 0.25 * (99 + 99 + 49), melee = base + 0.325 * 198
        let expected = 0.25 * 247.0 + 0.325 * 198.0;
        assert!(approx(calculate_combat_level(&skills), expected));
    }
}
