//! Search ordering heuristics.
//!
//! - [`block_resident_order`]: which (block, resident) pair to decide next
//! - [`service_order`]: which service to try first for a pair

mod value;
mod variable;

pub use value::{
    adjacent_difficult, expected_rates, service_cooldown, service_order, service_sort_key,
    ServiceSortKey,
};
pub use variable::{block_resident_order, BlockResident};

#[cfg(test)]
mod tests;
