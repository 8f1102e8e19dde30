//! Formula engine: pure functions from skills to derived levels

pub mod combat;
pub mod offensive;

pub use combat::{
    calculate_combat_level, combat_breakdown, CombatBreakdown, CombatStyle, BASE_WEIGHT,
    OFFENSE_WEIGHT,
};
pub use offensive::{calculate_offensive_level, per_level_damage};
