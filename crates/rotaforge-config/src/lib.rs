//! Configuration system for RotaForge.
//!
//! Load scheduler configuration from TOML or YAML files to control the
//! program shape, the residency rule constants, and search options
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rotaforge_config::{SchedulerConfig, StaffingTarget};
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     [program]
//!     blocks_per_year = 4
//!
//!     [search]
//!     random_seed = 7
//!     staffing_target = "maximum"
//! "#).unwrap();
//!
//! assert_eq!(config.program.blocks_per_year, 4);
//! assert_eq!(config.program.num_years, 3);
//! assert_eq!(config.search.staffing_target, StaffingTarget::Maximum);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rotaforge_config::SchedulerConfig;
//!
//! let config = SchedulerConfig::load("rotaforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use rotaforge_core::RotaForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of blocks in a program year.
pub const DEFAULT_BLOCKS_PER_YEAR: usize = 13;

/// Default length of the residency program in years.
pub const DEFAULT_NUM_YEARS: u32 = 3;

/// Default number of weeks in a block.
pub const DEFAULT_WEEKS_PER_BLOCK: u32 = 4;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RotaForgeError {
    fn from(err: ConfigError) -> Self {
        RotaForgeError::Config(err.to_string())
    }
}

/// Main scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Shape of the residency program.
    #[serde(default)]
    pub program: ProgramConfig,

    /// Constants used by the residency rules.
    #[serde(default)]
    pub rules: RuleConfig,

    /// Search options.
    #[serde(default)]
    pub search: SearchConfig,
}

impl SchedulerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the number of blocks per year.
    pub fn with_blocks_per_year(mut self, blocks: usize) -> Self {
        self.program.blocks_per_year = blocks;
        self
    }

    /// Sets the program length in years.
    pub fn with_num_years(mut self, years: u32) -> Self {
        self.program.num_years = years;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.search.random_seed = seed;
        self
    }

    /// Enables or disables randomized tiebreaks.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.search.randomize = randomize;
        self
    }

    /// Sets how much open capacity each service starts a block with.
    pub fn with_staffing_target(mut self, target: StaffingTarget) -> Self {
        self.search.staffing_target = target;
        self
    }

    /// Checks the configuration for values the scheduler cannot work with.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotaforge_config::SchedulerConfig;
    ///
    /// assert!(SchedulerConfig::default().validate().is_ok());
    /// assert!(SchedulerConfig::default().with_num_years(1).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let program = &self.program;
        if program.blocks_per_year == 0 {
            return Err(ConfigError::Invalid(
                "blocks_per_year must be at least 1".to_string(),
            ));
        }
        // Quota pacing spreads the senior quota over every year but the first.
        if program.num_years < 2 {
            return Err(ConfigError::Invalid(format!(
                "num_years must be at least 2, got {}",
                program.num_years
            )));
        }
        if program.weeks_per_block == 0 {
            return Err(ConfigError::Invalid(
                "weeks_per_block must be at least 1".to_string(),
            ));
        }
        if self.rules.late_year_blackout_year == 0 {
            return Err(ConfigError::Invalid(
                "late_year_blackout_year is 1-based".to_string(),
            ));
        }
        Ok(())
    }
}

/// Shape of the residency program.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ProgramConfig {
    /// Number of scheduling blocks in one year.
    pub blocks_per_year: usize,

    /// Years a resident spends in the program.
    pub num_years: u32,

    /// Length of a block in weeks.
    pub weeks_per_block: u32,
}

impl ProgramConfig {
    /// Length of the program year in weeks.
    pub fn weeks_per_year(&self) -> u32 {
        self.weeks_per_block * self.blocks_per_year as u32
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            blocks_per_year: DEFAULT_BLOCKS_PER_YEAR,
            num_years: DEFAULT_NUM_YEARS,
            weeks_per_block: DEFAULT_WEEKS_PER_BLOCK,
        }
    }
}

/// Constants for the residency rules.
///
/// Block numbers here are 0-based, matching the scheduler's block indices.
/// Blocks that fall outside the configured year never match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RuleConfig {
    /// Blocks in which fellowship applicants stay off core services.
    pub fellowship_blackout_blocks: Vec<usize>,

    /// Late-year block in which `late_year_blackout_year` residents stay off core services.
    pub late_year_blackout_block: usize,

    /// Program year affected by the late-year core blackout.
    ///
    /// Defaults to year 3 as the existing program does; it is not derived from `num_years`.
    pub late_year_blackout_year: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            fellowship_blackout_blocks: vec![3, 4],
            late_year_blackout_block: 12,
            late_year_blackout_year: 3,
        }
    }
}

/// Search options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchConfig {
    /// Random seed for reproducible tiebreaks.
    pub random_seed: u64,

    /// Randomize tiebreaks between equally constrained residents.
    pub randomize: bool,

    /// Open capacity each service starts a block with.
    pub staffing_target: StaffingTarget,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            randomize: true,
            staffing_target: StaffingTarget::default(),
        }
    }
}

/// How many seniors the search tries to place on a service per block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingTarget {
    /// Fill each service to its per-block minimum; extra residents go free.
    #[default]
    Minimum,

    /// Fill each service up to its per-block maximum before granting free blocks.
    Maximum,
}

#[cfg(test)]
mod tests;
