//! RotaForge Solver Engine
//!
//! This crate provides the rotation search:
//! - Schedule state with incremental counters (assign/undo pairs)
//! - Residency rules
//! - Variable and value ordering heuristics
//! - Depth-first backtracking search with an explicit stack
//! - Search statistics

pub mod history;
pub mod ordering;
pub mod rules;
pub mod schedule;
pub mod search;
pub mod state;
pub mod stats;

pub use history::ServiceHistory;
pub use ordering::{
    adjacent_difficult, block_resident_order, expected_rates, service_cooldown, service_order,
    service_sort_key, BlockResident, ServiceSortKey,
};
pub use rules::{Rule, RuleBook};
pub use schedule::{Schedule, ServiceOccupancy};
pub use search::Scheduler;
pub use state::{Roster, ScheduleState, Slot};
pub use stats::SearchStats;
