//! Integration tests for the combat formula

use combat_calc::formula::{calculate_combat_level, combat_breakdown, CombatStyle};
use combat_calc::{Skill, SkillSet};
use proptest::prelude::*;

fn skill_set() -> impl Strategy<Value = SkillSet> {
    prop::array::uniform7(0.0f64..500.0).prop_map(|levels| {
        Skill::ALL
            .into_iter()
            .zip(levels)
            .fold(SkillSet::default(), |set, (skill, level)| set.with(skill, level))
    })
}

fn any_skill() -> impl Strategy<Value = Skill> {
    prop::sample::select(Skill::ALL.to_vec())
}

proptest! {
    /// Raising any single skill never lowers combat level
    #[test]
    fn combat_level_is_monotonic(skills in skill_set(), skill in any_skill(), bump in 0.0f64..100.0) {
        let before = calculate_combat_level(&skills);
        let raised = skills.with(skill, skills.get(skill) + bump);
        prop_assert!(calculate_combat_level(&raised) >= before);
    }

    #[test]
    fn combat_level_is_pure(skills in skill_set()) {
        let copy = skills;
        let first = calculate_combat_level(&skills);
        let second = calculate_combat_level(&skills);
        prop_assert_eq!(first, second);
        prop_assert_eq!(skills, copy);
    }

    #[test]
    fn combat_level_is_non_negative(skills in skill_set()) {
        prop_assert!(calculate_combat_level(&skills) >= 0.0);
    }

    #[test]
    fn level_is_the_larger_style(skills in skill_set()) {
        let b = combat_breakdown(&skills);
        prop_assert_eq!(b.level, b.melee.max(b.ranged_or_magic));
        match b.style {
            CombatStyle::Melee => prop_assert!(b.melee >= b.ranged_or_magic),
            CombatStyle::RangedMagic => prop_assert!(b.ranged_or_magic > b.melee),
        }
    }
}

#[test]
fn test_documented_example() {
    let skills = SkillSet::default().with(Skill::Hitpoints, 10.0);
    assert_eq!(format!("{:.2}", calculate_combat_level(&skills)), "3.40");
}

#[test]
fn test_ranged_and_magic_are_interchangeable() {
    let ranged = SkillSet::default().with(Skill::Ranged, 80.0);
    let magic = SkillSet::default().with(Skill::Magic, 80.0);
    assert_eq!(calculate_combat_level(&ranged), calculate_combat_level(&magic));
}
