//! Entity model for rotation scheduling
//!
//! - `Resident`: a program participant, identified by a stable `ResidentId`
//! - `Service`: a rotation with per-block staffing and per-senior quotas
//!
//! The scheduler addresses both by position. Block, resident, and service
//! indices are plain `usize` values; the aliases below document which is which.

mod resident;
mod service;

pub use resident::{Resident, ResidentId};
pub use service::{CountRange, Service};

/// 0-based index of a block within the year.
pub type BlockIndex = usize;

/// Index into the scheduler's sorted resident list.
pub type ResidentIndex = usize;

/// Index into the scheduler's service list.
pub type ServiceIndex = usize;
