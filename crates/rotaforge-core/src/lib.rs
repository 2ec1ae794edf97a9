//! RotaForge Core - entity types for residency rotation scheduling
//!
//! This crate provides the records the scheduling engine reads:
//! - Residents and their stable identities
//! - Services with staffing ranges and per-senior quotas
//! - The shared error type

pub mod domain;
pub mod error;

pub use domain::{BlockIndex, CountRange, Resident, ResidentId, ResidentIndex, Service, ServiceIndex};
pub use error::{Result, RotaForgeError};
