use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Combat level cannot exceed {}!", group_thousands(.max))]
    CombatLevelTooHigh { requested: f64, max: f64 },

    #[error("{field} is not a finite number")]
    NonFiniteLevel { field: String },

    #[error("Cannot reach combat level {target}: no adjustable skills")]
    NoAdjustableSkills { target: f64 },

    #[error("Gave up after {iterations} steps before reaching combat level {target}")]
    SearchExhausted { target: f64, iterations: u32 },

    #[error("Offensive bonus of {0} leaves zero damage per level")]
    DegenerateOffensiveBonus(f64),

    #[error("Calculation produced a non-finite value: {0}")]
    NonFiniteResult(f64),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Render whole numbers with comma separators, e.g. 10,000
fn group_thousands(value: &f64) -> String {
    let value = *value;
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= 1e15 {
        return value.to_string();
    }
    let digits = (value.abs() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
