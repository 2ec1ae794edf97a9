//! Residency rules that forbid individual assignments.
//!
//! The rule list is fixed. Each rule is a pure predicate over the entity
//! records, the rule constants, and the resident's current service count.

use std::fmt;

use rotaforge_config::RuleConfig;
use rotaforge_core::{BlockIndex, Resident, ResidentIndex, Service, ServiceIndex};

use crate::state::ScheduleState;

/// Program year of residents subject to the earliest-block restriction.
const SECOND_YEAR: u32 = 2;

/// A single residency rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The resident has already reached the service's per-senior maximum.
    QuotaReached,
    /// Second-year resident before the service's earliest allowed block.
    TooEarlyForSecondYear,
    /// Fellowship applicant on a core service during a blackout block.
    FellowshipBlackout,
    /// Rising chief in the final block of the year.
    RisingChiefLastBlock,
    /// Core service for the configured program year in the late-year blackout block.
    LateYearCoreBlackout,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 5] = [
        Rule::QuotaReached,
        Rule::TooEarlyForSecondYear,
        Rule::FellowshipBlackout,
        Rule::RisingChiefLastBlock,
        Rule::LateYearCoreBlackout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::QuotaReached => "quota_reached",
            Rule::TooEarlyForSecondYear => "too_early_for_second_year",
            Rule::FellowshipBlackout => "fellowship_blackout",
            Rule::RisingChiefLastBlock => "rising_chief_last_block",
            Rule::LateYearCoreBlackout => "late_year_core_blackout",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluates the rule list against one roster.
#[derive(Debug, Clone, Copy)]
pub struct RuleBook<'a> {
    services: &'a [Service],
    residents: &'a [Resident],
    blocks_per_year: usize,
    config: &'a RuleConfig,
}

impl<'a> RuleBook<'a> {
    pub fn new(
        services: &'a [Service],
        residents: &'a [Resident],
        blocks_per_year: usize,
        config: &'a RuleConfig,
    ) -> Self {
        Self {
            services,
            residents,
            blocks_per_year,
            config,
        }
    }

    /// Returns true if `rule` forbids putting `resident` on `service` in `block`.
    pub fn is_violated(
        &self,
        rule: Rule,
        state: &ScheduleState,
        block: BlockIndex,
        resident: ResidentIndex,
        service: ServiceIndex,
    ) -> bool {
        let r = &self.residents[resident];
        let s = &self.services[service];
        match rule {
            Rule::QuotaReached => {
                state.times_assigned(resident, service) >= s.max_blocks_per_senior()
            }
            // earliest_pgy2_block is 1-indexed
            Rule::TooEarlyForSecondYear => {
                r.year() == SECOND_YEAR && block + 1 < s.earliest_pgy2_block as usize
            }
            Rule::FellowshipBlackout => {
                r.is_fellowship_applicant()
                    && s.is_core
                    && self.config.fellowship_blackout_blocks.contains(&block)
            }
            Rule::RisingChiefLastBlock => {
                r.is_rising_chief() && block + 1 == self.blocks_per_year
            }
            Rule::LateYearCoreBlackout => {
                block == self.config.late_year_blackout_block
                    && r.year() == self.config.late_year_blackout_year
                    && s.is_core
            }
        }
    }

    /// Short-circuiting check of every rule.
    #[inline]
    pub fn violates_any(
        &self,
        state: &ScheduleState,
        block: BlockIndex,
        resident: ResidentIndex,
        service: ServiceIndex,
    ) -> bool {
        self.first_violation(state, block, resident, service).is_some()
    }

    /// The first rule, in evaluation order, that forbids the assignment.
    pub fn first_violation(
        &self,
        state: &ScheduleState,
        block: BlockIndex,
        resident: ResidentIndex,
        service: ServiceIndex,
    ) -> Option<Rule> {
        Rule::ALL
            .into_iter()
            .find(|&rule| self.is_violated(rule, state, block, resident, service))
    }
}

#[cfg(test)]
mod tests;
