//! Error types for RotaForge

use thiserror::Error;

use crate::domain::ResidentId;

/// Main error type for RotaForge operations.
///
/// An infeasible roster is not an error: the scheduler reports it as an
/// empty result. These variants cover inputs that can never be scheduled
/// meaningfully and are rejected before search begins.
#[derive(Debug, Error)]
pub enum RotaForgeError {
    /// Error in scheduler configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed resident or service definition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Service history names a resident that is not on the roster
    #[error("Service history references unknown resident {0}")]
    UnknownResident(ResidentId),

    /// Service history names a service index past the end of the service list
    #[error("Service index {index} is out of range ({service_count} services)")]
    ServiceIndexOutOfRange { index: usize, service_count: usize },
}

/// Result type alias for RotaForge operations
pub type Result<T> = std::result::Result<T, RotaForgeError>;
