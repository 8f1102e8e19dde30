//! Calculator configuration with documented constants
//!
//! Limits that shape user-facing behavior live here, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{CalcError, Result};

/// Configuration for the calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Highest combat level the form accepts as input
    ///
    /// Anything above is rejected with a warning before any calculation
    /// runs. The boundary value itself is accepted.
    pub max_combat_level: f64,

    /// Upper bound on missing-level search steps
    ///
    /// Each step raises every unlocked skill by one. The slowest single
    /// skill (prayer, worth 0.125 combat per level) needs about 80,000
    /// steps to reach the default maximum, so 1,000,000 leaves headroom
    /// while still turning a runaway search into an error.
    pub max_search_iterations: u32,

    /// Decimal places shown for combat levels in text output
    pub display_precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_combat_level: 10_000.0,
            max_search_iterations: 1_000_000,
            display_precision: 2,
        }
    }
}

impl CalculatorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(?path, "loaded calculator config");
        Ok(config)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.max_combat_level.is_finite() || self.max_combat_level <= 0.0 {
            return Err(CalcError::InvalidConfig(format!(
                "max_combat_level ({}) must be a positive number",
                self.max_combat_level
            )));
        }

        if self.max_search_iterations == 0 {
            return Err(CalcError::InvalidConfig(
                "max_search_iterations must be at least 1".into(),
            ));
        }

        if self.display_precision > 10 {
            return Err(CalcError::InvalidConfig(format!(
                "display_precision ({}) should be <= 10",
                self.display_precision
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_combat_level, 10_000.0);
        assert_eq!(config.display_precision, 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CalculatorConfig::from_toml("display_precision = 4").unwrap();
        assert_eq!(config.display_precision, 4);
        assert_eq!(config.max_combat_level, 10_000.0);
        assert_eq!(config.max_search_iterations, 1_000_000);
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let result = CalculatorConfig::from_toml("max_search_iterations = 0");
        assert!(matches!(result, Err(CalcError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_max_level() {
        let result = CalculatorConfig::from_toml("max_combat_level = -5.0");
        assert!(matches!(result, Err(CalcError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("combat_calc_no_such_config.toml");
        let result = CalculatorConfig::load(&path);
        assert!(matches!(result, Err(CalcError::IoError(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "combat_calc_config_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "max_combat_level = 500.0\n").unwrap();
        let config = CalculatorConfig::load(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.max_combat_level, 500.0);
        assert_eq!(config.display_precision, 2);
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let result = CalculatorConfig::from_toml("max_combat_level = \"lots\"");
        assert!(matches!(result, Err(CalcError::TomlError(_))));
    }
}
