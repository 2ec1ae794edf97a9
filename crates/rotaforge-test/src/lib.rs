//! Shared test fixtures for RotaForge crates.
//!
//! - [`roster`] - a small residency class covering every resident flag
//! - [`services`] - three core "firm" services
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rotaforge-test = { workspace = true }
//! ```
//!
//! The fixtures are sized for [`short_year_config`]: four blocks per year,
//! which keeps exhaustive searches fast.

pub mod roster;
pub mod services;

pub use roster::{roster, two_seniors};
pub use services::firm_services;

use rotaforge_config::SchedulerConfig;

/// Blocks per year used by the fixture scenarios.
pub const SHORT_YEAR_BLOCKS: usize = 4;

/// Default configuration shrunk to [`SHORT_YEAR_BLOCKS`] blocks.
///
/// ```
/// use rotaforge_test::{short_year_config, SHORT_YEAR_BLOCKS};
///
/// let config = short_year_config();
/// assert_eq!(config.program.blocks_per_year, SHORT_YEAR_BLOCKS);
/// assert!(config.validate().is_ok());
/// ```
pub fn short_year_config() -> SchedulerConfig {
    SchedulerConfig::default().with_blocks_per_year(SHORT_YEAR_BLOCKS)
}
