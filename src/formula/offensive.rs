//! Implied skill level from an observed damage roll
//!
//! The damage model is linear in level: every level adds
//! `(offensive_bonus + 64) / 640` damage, and the combat stance adds a
//! few invisible levels on top. Solving for level gives a closed form.

use crate::core::error::{CalcError, Result};
use crate::core::types::OffensiveSample;

/// Invisible levels granted by the aggressive stance
pub const AGGRESSIVE_BOOST: f64 = 3.0;

/// Invisible levels granted by every other stance
pub const STANDARD_BOOST: f64 = 1.0;

const BONUS_OFFSET: f64 = 64.0;
const DAMAGE_DIVISOR: f64 = 640.0;

/// Damage added per level for a given offensive bonus
pub fn per_level_damage(offensive_bonus: f64) -> f64 {
    (offensive_bonus + BONUS_OFFSET) / DAMAGE_DIVISOR
}

/// Recover the skill level that explains `sample`
///
/// Fails when the bonus cancels out the per-level damage entirely, since
/// every level would then deal the same damage.
pub fn calculate_offensive_level(sample: &OffensiveSample, aggressive: bool) -> Result<f64> {
    let boost = if aggressive {
        AGGRESSIVE_BOOST
    } else {
        STANDARD_BOOST
    };

    let per_level = per_level_damage(sample.offensive_bonus);
    if per_level == 0.0 {
        return Err(CalcError::DegenerateOffensiveBonus(sample.offensive_bonus));
    }

    let adjusted = sample.base_damage - boost * per_level;
    let level = (adjusted - 0.5) / per_level;
    if !level.is_finite() {
        return Err(CalcError::NonFiniteResult(level));
    }

    tracing::debug!(
        base_damage = sample.base_damage,
        offensive_bonus = sample.offensive_bonus,
        aggressive,
        level,
        "inferred offensive level"
    );
    Ok(level)
}
