//! Tests for the ordering heuristics.

use super::variable::restriction_weight;
use super::*;
use crate::rules::RuleBook;
use crate::state::ScheduleState;
use rotaforge_config::{RuleConfig, StaffingTarget};
use rotaforge_core::{CountRange, Service};
use rotaforge_test::{firm_services, roster, SHORT_YEAR_BLOCKS};

const YEARS: u32 = 3;

fn fresh_state() -> ScheduleState {
    ScheduleState::new(
        &firm_services(),
        &roster(),
        SHORT_YEAR_BLOCKS,
        YEARS,
        StaffingTarget::Minimum,
    )
}

fn order_for(randomize: bool, seed: u64) -> Vec<BlockResident> {
    let services = firm_services();
    let residents = roster();
    let config = RuleConfig::default();
    let rules = RuleBook::new(&services, &residents, SHORT_YEAR_BLOCKS, &config);
    let state = fresh_state();
    block_resident_order(&rules, &state, &services, &residents, randomize, seed)
}

#[test]
fn test_expected_rates_spread_over_senior_years() {
    let rates = expected_rates(&firm_services(), SHORT_YEAR_BLOCKS, YEARS);
    assert_eq!(rates, vec![0.25, 0.125, 0.125]);
}

#[test]
fn test_restriction_weight() {
    let services = firm_services();
    assert!((restriction_weight(&services[0]) - 2.0 / 3.0).abs() < 1e-12);
    assert!((restriction_weight(&services[1]) - 0.5).abs() < 1e-12);

    // A zero per-senior maximum must not divide by zero.
    let unbounded = Service::new("Nights").with_senior_staffing(CountRange::exactly(2));
    assert_eq!(restriction_weight(&unbounded), 2.0);
}

#[test]
fn test_cooldown_weights_near_repeats() {
    let mut state = fresh_state();
    state.assign(0, 0, 1);
    state.assign(3, 0, 1);

    assert_eq!(service_cooldown(&state, 1, 0, 1), 2 + 1);
    assert_eq!(service_cooldown(&state, 2, 0, 1), 1 + 2);
    assert_eq!(service_cooldown(&state, 1, 0, 2), 0);
    assert_eq!(service_cooldown(&state, 1, 7, 1), 0);
}

#[test]
fn test_cooldown_at_year_edges() {
    let mut state = fresh_state();
    state.assign(1, 4, 2);

    assert_eq!(service_cooldown(&state, 0, 4, 2), 2);
    assert_eq!(service_cooldown(&state, 3, 4, 2), 1);
}

#[test]
fn test_adjacent_difficult() {
    let services = firm_services();
    let mut state = fresh_state();
    state.assign(0, 0, 0);

    assert!(adjacent_difficult(&services, &state, 1, 0, 0));
    assert!(!adjacent_difficult(&services, &state, 1, 0, 1));
    assert!(!adjacent_difficult(&services, &state, 2, 0, 0));
    assert!(!adjacent_difficult(&services, &state, 1, 5, 0));
}

#[test]
fn test_service_order_prefers_behind_pace() {
    let services = firm_services();
    let rates = expected_rates(&services, SHORT_YEAR_BLOCKS, YEARS);
    let state = fresh_state();

    // Equal pressure everywhere; lower expected rate sorts first and ties
    // keep index order.
    assert_eq!(service_order(&services, &rates, &state, 0, 0), vec![1, 2, 0]);
}

#[test]
fn test_service_order_pushes_repeats_last() {
    let services = firm_services();
    let rates = expected_rates(&services, SHORT_YEAR_BLOCKS, YEARS);
    let mut state = fresh_state();
    state.assign(0, 0, 1);

    assert_eq!(service_order(&services, &rates, &state, 1, 0), vec![2, 0, 1]);

    let key = service_sort_key(&services, &rates, &state, 1, 0, 1);
    assert_eq!(key.cooldown, 2);
    assert!(!key.adjacent_difficult);
    assert_eq!(key.capacity_pressure, -1);
}

#[test]
fn test_sort_key_compares_fields_in_order() {
    let base = ServiceSortKey {
        cooldown: 0,
        adjacent_difficult: false,
        capacity_pressure: 5,
        pace_deviation: 1.0,
    };
    let hotter = ServiceSortKey {
        cooldown: 1,
        capacity_pressure: -10,
        ..base
    };
    let difficult = ServiceSortKey {
        adjacent_difficult: true,
        ..base
    };
    let behind = ServiceSortKey {
        pace_deviation: -0.5,
        ..base
    };

    assert!(base.cmp_key(&hotter).is_lt());
    assert!(base.cmp_key(&difficult).is_lt());
    assert!(behind.cmp_key(&base).is_lt());
}

#[test]
fn test_block_order_covers_every_pair_once() {
    let order = order_for(true, 7);
    assert_eq!(order.len(), SHORT_YEAR_BLOCKS * 8);

    let mut seen = order.clone();
    seen.sort_by_key(|p| (p.block, p.resident));
    seen.dedup();
    assert_eq!(seen.len(), order.len());
}

#[test]
fn test_most_restricted_block_first() {
    let order = order_for(false, 0);

    // Block 3 is the last block (rising chiefs) and a fellowship blackout.
    assert!(order[..8].iter().all(|p| p.block == 3));
    let restricted: Vec<_> = order[..4].iter().map(|p| p.resident).collect();
    assert_eq!(restricted, vec![2, 3, 5, 6]);

    // Unrestricted pairs: third-years first, then by index.
    let rest: Vec<_> = order[4..8].iter().map(|p| p.resident).collect();
    assert_eq!(rest, vec![0, 7, 1, 4]);

    // Remaining blocks tie on restriction and follow block order.
    let blocks: Vec<_> = order[8..].iter().map(|p| p.block).collect();
    let mut sorted = blocks.clone();
    sorted.sort();
    assert_eq!(blocks, sorted);
    assert_eq!(order[8], BlockResident::new(0, 0));
}

#[test]
fn test_order_is_deterministic_for_a_seed() {
    assert_eq!(order_for(true, 42), order_for(true, 42));
}

#[test]
fn test_order_ignores_seed_without_randomize() {
    assert_eq!(order_for(false, 1), order_for(false, 99));
}

#[test]
fn test_randomize_only_reorders_ties() {
    let baseline = order_for(false, 0);
    let shuffled = order_for(true, 3);

    let blocks = |order: &[BlockResident]| order.iter().map(|p| p.block).collect::<Vec<_>>();
    assert_eq!(blocks(&baseline), blocks(&shuffled));

    let mut restricted: Vec<_> = shuffled[..4].iter().map(|p| p.resident).collect();
    restricted.sort();
    assert_eq!(restricted, vec![2, 3, 5, 6]);

    let differs = (0..8).any(|seed| order_for(true, seed) != baseline);
    assert!(differs);
}
