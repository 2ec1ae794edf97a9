//! Depth-first backtracking over the (block, resident) order.
//!
//! Runs on an explicit stack: depth equals the number of frames, so the
//! search never recurses regardless of roster size.

use rotaforge_core::{Resident, Service};
use tracing::{info, trace};

use super::frame::{Decision, Frame};
use crate::ordering::{service_order, BlockResident};
use crate::rules::RuleBook;
use crate::state::ScheduleState;
use crate::stats::SearchStats;

pub(crate) struct Backtracker<'a> {
    pub(crate) services: &'a [Service],
    pub(crate) residents: &'a [Resident],
    pub(crate) rules: RuleBook<'a>,
    pub(crate) order: &'a [BlockResident],
    pub(crate) expected_rates: &'a [f64],
    pub(crate) verbose: bool,
    pub(crate) stats: SearchStats,
}

impl Backtracker<'_> {
    /// Searches for a globally valid completion of `state`.
    ///
    /// On success the state holds the schedule. On failure every decision
    /// made here has been undone.
    pub(crate) fn run(&mut self, state: &mut ScheduleState) -> bool {
        let total = self.order.len();
        let mut stack: Vec<Frame> = Vec::with_capacity(total);

        loop {
            let depth = stack.len();
            if depth == total {
                if state.is_valid() {
                    return true;
                }
                self.stats.record_rejected_schedule();
                trace!(event = "rejected", depth = depth);
            } else {
                let pair = self.order[depth];
                let frame = if state.slot(pair.resident, pair.block).is_assigned() {
                    Frame::preassigned(pair)
                } else {
                    let candidates = service_order(
                        self.services,
                        self.expected_rates,
                        state,
                        pair.block,
                        pair.resident,
                    );
                    Frame::open(pair, candidates)
                };
                stack.push(frame);
            }

            // Advance the deepest frame that still has an option left.
            loop {
                let Some(frame) = stack.last_mut() else {
                    return false;
                };
                if self.advance(frame, state) {
                    break;
                }
                stack.pop();
            }
        }
    }

    /// Undoes the frame's current decision and applies its next option.
    ///
    /// Returns false once the frame is exhausted; the state is then back to
    /// what it was when the frame was pushed.
    fn advance(&mut self, frame: &mut Frame, state: &mut ScheduleState) -> bool {
        let BlockResident { block, resident } = frame.pair;

        match frame.take_decision() {
            Some(Decision::Preassigned) => return false,
            Some(Decision::Free) => {
                state.unassign_free(block, resident);
                self.stats.record_backtrack();
                trace!(event = "undo_free", block = block, resident = resident);
                // The fallback is always the last option.
                return false;
            }
            Some(Decision::Service(service)) => {
                state.unassign(block, resident, service);
                self.stats.record_backtrack();
                trace!(
                    event = "undo",
                    block = block,
                    resident = resident,
                    service = service,
                );
            }
            None if frame.is_preassigned() => {
                frame.set_decision(Decision::Preassigned);
                return true;
            }
            None => {}
        }

        while let Some(service) = frame.next_candidate() {
            if state.remaining_spots(service, block) == 0
                || self.rules.violates_any(state, block, resident, service)
            {
                continue;
            }
            state.assign(block, resident, service);
            self.stats.record_assignment();
            frame.set_decision(Decision::Service(service));
            trace!(
                event = "assign",
                block = block,
                resident = resident,
                service = service,
            );
            return true;
        }

        // More residents than open spots left in this block: someone can
        // take a free block, and no rule applies to that.
        if frame.claim_fallback()
            && state.remaining_residents_in_block(block) > state.remaining_spots_in_block(block)
        {
            state.assign_free(block, resident);
            self.stats.record_free_block();
            frame.set_decision(Decision::Free);
            trace!(event = "free_block", block = block, resident = resident);
            return true;
        }

        self.stats.record_dead_end();
        self.report_dead_end(frame.pair, state);
        false
    }

    fn report_dead_end(&self, pair: BlockResident, state: &ScheduleState) {
        let resident = self.residents[pair.resident].to_string();
        let remaining = state.remaining_residents_in_block(pair.block);
        if self.verbose {
            info!(
                event = "dead_end",
                block = pair.block + 1,
                resident = %resident,
                remaining_residents = remaining,
            );
        } else {
            trace!(
                event = "dead_end",
                block = pair.block + 1,
                resident = %resident,
                remaining_residents = remaining,
            );
        }
    }
}
