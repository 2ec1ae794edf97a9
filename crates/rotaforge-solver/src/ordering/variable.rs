//! Order in which (block, resident) pairs are decided.
//!
//! Pairs with many forbidden services are decided first, grouped by how
//! restricted their block is overall, so dead ends surface near the root.

use std::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rotaforge_core::{BlockIndex, Resident, ResidentIndex, Service};

use crate::rules::RuleBook;
use crate::state::ScheduleState;

/// One decision of the search: what `resident` does in `block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockResident {
    pub block: BlockIndex,
    pub resident: ResidentIndex,
}

impl BlockResident {
    pub const fn new(block: BlockIndex, resident: ResidentIndex) -> Self {
        Self { block, resident }
    }
}

/// Restrictiveness weight of a service: its per-block staffing minimum
/// spread over how many blocks one senior may cover.
pub(crate) fn restriction_weight(service: &Service) -> f64 {
    let max_blocks = service.max_blocks_per_senior().max(1);
    service.min_seniors_per_block() as f64 / max_blocks as f64
}

#[derive(Debug)]
struct Ranked {
    pair: BlockResident,
    block_restriction: f64,
    pair_restriction: f64,
    year: u32,
    tiebreak: u64,
}

impl Ranked {
    fn cmp_priority(&self, other: &Self) -> Ordering {
        other
            .block_restriction
            .total_cmp(&self.block_restriction)
            .then_with(|| self.pair.block.cmp(&other.pair.block))
            .then_with(|| other.pair_restriction.total_cmp(&self.pair_restriction))
            .then_with(|| other.year.cmp(&self.year))
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

/// Computes the full decision order for one search.
///
/// Sort keys, in order: block restrictiveness (descending), block index,
/// pair restrictiveness (descending), resident year (descending), then a
/// seeded random value when `randomize` is set or the resident index
/// otherwise.
///
/// Restrictiveness of a pair sums [`restriction_weight`] over every service
/// a rule forbids for it; a block's restrictiveness sums its pairs.
pub fn block_resident_order(
    rules: &RuleBook<'_>,
    state: &ScheduleState,
    services: &[Service],
    residents: &[Resident],
    randomize: bool,
    seed: u64,
) -> Vec<BlockResident> {
    let blocks = state.blocks_per_year();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut block_restriction = vec![0.0_f64; blocks];
    let mut ranked = Vec::with_capacity(blocks * residents.len());

    for block in 0..blocks {
        for (resident, r) in residents.iter().enumerate() {
            let pair_restriction: f64 = services
                .iter()
                .enumerate()
                .filter(|&(service, _)| rules.violates_any(state, block, resident, service))
                .map(|(_, s)| restriction_weight(s))
                .sum();
            block_restriction[block] += pair_restriction;

            let tiebreak = if randomize {
                rng.random::<u64>()
            } else {
                resident as u64
            };
            ranked.push(Ranked {
                pair: BlockResident::new(block, resident),
                block_restriction: 0.0,
                pair_restriction,
                year: r.year(),
                tiebreak,
            });
        }
    }

    for entry in &mut ranked {
        entry.block_restriction = block_restriction[entry.pair.block];
    }
    ranked.sort_by(Ranked::cmp_priority);
    ranked.into_iter().map(|entry| entry.pair).collect()
}
