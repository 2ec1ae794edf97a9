//! RotaForge - A Residency Rotation Scheduler in Rust
//!
//! Assigns senior residents to services block by block with a
//! depth-first backtracking search, honoring per-block staffing ranges,
//! per-resident quotas and a fixed set of residency rules.
//!
//! # Example
//!
//! ```rust
//! use rotaforge::prelude::*;
//!
//! let services = vec![
//!     Service::new("Wards")
//!         .core()
//!         .with_senior_staffing(CountRange::exactly(1))
//!         .with_senior_quota(CountRange::new(1, 2)),
//!     Service::new("Clinic")
//!         .with_senior_staffing(CountRange::exactly(1))
//!         .with_senior_quota(CountRange::new(1, 2)),
//! ];
//! let residents = vec![
//!     Resident::new("Ana", "Ruiz", 3),
//!     Resident::new("Ben", "Okafor", 3),
//! ];
//! let config = SchedulerConfig::default().with_blocks_per_year(2);
//!
//! let schedule = rotaforge::schedule(services, residents, &config, None)
//!     .unwrap()
//!     .expect("two residents cover two single-senior services");
//! assert_eq!(schedule.occupancy(0, 0), 1);
//! ```

// Domain
pub use rotaforge_core::{
    BlockIndex, CountRange, Resident, ResidentId, ResidentIndex, Result, RotaForgeError, Service,
    ServiceIndex,
};

// Configuration
pub use rotaforge_config::{
    ConfigError, ProgramConfig, RuleConfig, SchedulerConfig, SearchConfig, StaffingTarget,
};

// Search
pub use rotaforge_solver::{
    Rule, Schedule, Scheduler, SearchStats, ServiceHistory, ServiceOccupancy, Slot,
};

#[cfg(feature = "console")]
pub mod console;

/// Builds a scheduler and runs one search with the configured settings.
///
/// Resident indices in the returned [`Schedule`] follow the residents'
/// sorted order (`residents.sort()` on the caller's copy reproduces it).
/// Use [`Scheduler`] directly to keep the roster alongside the result or
/// to read [`SearchStats`].
pub fn schedule(
    services: Vec<Service>,
    residents: Vec<Resident>,
    config: &SchedulerConfig,
    history: Option<&ServiceHistory>,
) -> Result<Option<Schedule>> {
    let mut scheduler = Scheduler::new(services, residents, config.clone())?;
    scheduler.solve(history)
}

pub mod prelude {
    pub use super::{
        CountRange, Resident, ResidentId, RotaForgeError, Schedule, Scheduler, SchedulerConfig,
        Service, ServiceHistory, Slot, StaffingTarget,
    };
}
