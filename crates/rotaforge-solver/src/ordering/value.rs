//! Preference order over candidate services for one (block, resident) pair.

use std::cmp::Ordering;

use rotaforge_core::{BlockIndex, ResidentIndex, Service, ServiceIndex};

use crate::state::{ScheduleState, Slot};

/// Composite sort key for a candidate service. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceSortKey {
    /// 2 per copy of the service in an adjacent block, 1 per copy two blocks away.
    pub cooldown: u32,
    /// Difficult service next to another difficult service.
    pub adjacent_difficult: bool,
    /// Open spots for the block minus the per-senior maximum.
    pub capacity_pressure: i64,
    /// Expected rate minus the resident's current rate; negative when behind pace.
    pub pace_deviation: f64,
}

impl ServiceSortKey {
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.cooldown
            .cmp(&other.cooldown)
            .then_with(|| self.adjacent_difficult.cmp(&other.adjacent_difficult))
            .then_with(|| self.capacity_pressure.cmp(&other.capacity_pressure))
            .then_with(|| self.pace_deviation.total_cmp(&other.pace_deviation))
    }
}

/// Rate at which each service should be completed: the senior minimum
/// spread evenly over every program year but the first.
pub fn expected_rates(services: &[Service], blocks_per_year: usize, num_years: u32) -> Vec<f64> {
    let senior_blocks = (num_years.saturating_sub(1) as usize * blocks_per_year).max(1) as f64;
    services
        .iter()
        .map(|s| s.min_blocks_per_senior() as f64 / senior_blocks)
        .collect()
}

/// Scores repeats of the same service close to `block`.
pub fn service_cooldown(
    state: &ScheduleState,
    block: BlockIndex,
    resident: ResidentIndex,
    service: ServiceIndex,
) -> u32 {
    let blocks = state.blocks_per_year();
    let mut score = 0;
    for distance in 1..=2 {
        let weight = 3 - distance as u32;
        if block >= distance && state.slot(resident, block - distance) == Slot::Service(service) {
            score += weight;
        }
        if block + distance < blocks
            && state.slot(resident, block + distance) == Slot::Service(service)
        {
            score += weight;
        }
    }
    score
}

/// True if `service` is difficult and a neighbouring block already holds a
/// difficult service for the resident.
pub fn adjacent_difficult(
    services: &[Service],
    state: &ScheduleState,
    block: BlockIndex,
    resident: ResidentIndex,
    service: ServiceIndex,
) -> bool {
    if !services[service].is_difficult {
        return false;
    }
    let neighbours = [block.checked_sub(1), Some(block + 1)];
    neighbours
        .into_iter()
        .flatten()
        .filter(|&b| b < state.blocks_per_year())
        .filter_map(|b| state.slot(resident, b).service())
        .any(|s| services[s].is_difficult)
}

/// Builds the sort key for one candidate.
pub fn service_sort_key(
    services: &[Service],
    expected_rates: &[f64],
    state: &ScheduleState,
    block: BlockIndex,
    resident: ResidentIndex,
    service: ServiceIndex,
) -> ServiceSortKey {
    let remaining_blocks = state.remaining_blocks_for_resident(resident).max(1) as f64;
    let current_rate = state.times_assigned(resident, service) as f64 / remaining_blocks;
    ServiceSortKey {
        cooldown: service_cooldown(state, block, resident, service),
        adjacent_difficult: adjacent_difficult(services, state, block, resident, service),
        capacity_pressure: state.remaining_spots(service, block) as i64
            - services[service].max_blocks_per_senior() as i64,
        pace_deviation: expected_rates[service] - current_rate,
    }
}

/// All service indices, most preferred first. Ties keep index order.
pub fn service_order(
    services: &[Service],
    expected_rates: &[f64],
    state: &ScheduleState,
    block: BlockIndex,
    resident: ResidentIndex,
) -> Vec<ServiceIndex> {
    let mut keyed: Vec<(ServiceIndex, ServiceSortKey)> = (0..services.len())
        .map(|s| {
            (
                s,
                service_sort_key(services, expected_rates, state, block, resident, s),
            )
        })
        .collect();
    keyed.sort_by(|a, b| a.1.cmp_key(&b.1));
    keyed.into_iter().map(|(s, _)| s).collect()
}
