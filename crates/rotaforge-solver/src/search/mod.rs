//! The rotation scheduler.
//!
//! [`Scheduler`] owns the roster and the configuration. Every call to
//! [`Scheduler::create`] rebuilds the search state from scratch, fixes the
//! rising-chief final blocks, orders the (block, resident) pairs and runs a
//! depth-first backtracking search over them.

mod backtrack;
mod frame;

use std::time::Duration;

use rotaforge_config::SchedulerConfig;
use rotaforge_core::{Resident, ResidentId, ResidentIndex, Result, RotaForgeError, Service};
use tracing::{debug, info};

use crate::history::ServiceHistory;
use crate::ordering::{block_resident_order, expected_rates};
use crate::rules::RuleBook;
use crate::schedule::Schedule;
use crate::state::{Roster, ScheduleState, Slot};
use crate::stats::SearchStats;
use backtrack::Backtracker;

/// Backtracking rotation scheduler for one program year.
///
/// # Example
///
/// ```
/// use rotaforge_config::SchedulerConfig;
/// use rotaforge_core::{CountRange, Resident, Service};
/// use rotaforge_solver::Scheduler;
///
/// let services = vec![
///     Service::new("Wards")
///         .core()
///         .with_senior_staffing(CountRange::exactly(1))
///         .with_senior_quota(CountRange::new(1, 2)),
///     Service::new("Clinic")
///         .with_senior_staffing(CountRange::exactly(1))
///         .with_senior_quota(CountRange::new(1, 2)),
/// ];
/// let residents = vec![
///     Resident::new("Ana", "Ruiz", 3),
///     Resident::new("Ben", "Okafor", 3),
/// ];
/// let config = SchedulerConfig::default().with_blocks_per_year(2);
///
/// let mut scheduler = Scheduler::new(services, residents, config).unwrap();
/// assert!(scheduler.schedule().is_none());
///
/// let schedule = scheduler.solve(None).unwrap().expect("feasible");
/// assert_eq!(schedule.occupancy(0, 0), 1);
/// assert_eq!(schedule.occupancy(1, 1), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    services: Vec<Service>,
    residents: Vec<Resident>,
    config: SchedulerConfig,
    expected_rates: Vec<f64>,
    state: Option<ScheduleState>,
    solved: bool,
    last_stats: Option<SearchStats>,
}

impl Scheduler {
    /// Validates the inputs and prepares a scheduler.
    ///
    /// Residents are sorted by name, then by descending year. Every resident
    /// index the scheduler hands out refers to that order.
    pub fn new(
        services: Vec<Service>,
        mut residents: Vec<Resident>,
        config: SchedulerConfig,
    ) -> Result<Self> {
        config.validate()?;

        for service in &services {
            service
                .validate()
                .map_err(|msg| RotaForgeError::InvalidInput(format!("{service}: {msg}")))?;
        }

        let num_years = config.program.num_years;
        if let Some(resident) = residents
            .iter()
            .find(|r| r.year() == 0 || r.year() > num_years)
        {
            return Err(RotaForgeError::InvalidInput(format!(
                "{resident}: year must be between 1 and {num_years}"
            )));
        }

        residents.sort();
        let expected_rates = expected_rates(&services, config.program.blocks_per_year, num_years);

        Ok(Self {
            services,
            residents,
            config,
            expected_rates,
            state: None,
            solved: false,
            last_stats: None,
        })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Residents in scheduling order.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Position of a resident in [`residents`](Self::residents).
    pub fn resident_index(&self, id: ResidentId) -> Option<ResidentIndex> {
        self.residents.iter().position(|r| r.id() == id)
    }

    /// Runs one search using the configured randomization setting.
    pub fn solve(&mut self, history: Option<&ServiceHistory>) -> Result<Option<Schedule>> {
        let randomize = self.config.search.randomize;
        self.create(history, randomize, false)
    }

    /// Runs one search from a fresh state.
    ///
    /// `history` supplies service counts from earlier years. `randomize`
    /// breaks variable-order ties with the configured seed instead of the
    /// resident index. `verbose` raises dead-end diagnostics from TRACE to
    /// INFO and changes nothing else.
    ///
    /// Returns `Ok(None)` when no schedule satisfies every rule and the
    /// per-block staffing bounds.
    pub fn create(
        &mut self,
        history: Option<&ServiceHistory>,
        randomize: bool,
        verbose: bool,
    ) -> Result<Option<Schedule>> {
        self.solved = false;
        self.state = None;
        self.last_stats = None;

        let prior_counts = match history {
            Some(history) => self.resolve_history(history)?,
            None => Vec::new(),
        };

        let program = &self.config.program;
        let blocks = program.blocks_per_year;
        let mut state = ScheduleState::new(
            &self.services,
            &self.residents,
            blocks,
            program.num_years,
            self.config.search.staffing_target,
        );
        for &(resident, service, count) in &prior_counts {
            state.seed_count(resident, service, count);
        }

        // Rising chiefs take their final block off before anything else.
        let last_block = blocks - 1;
        let mut chiefs = 0usize;
        for (resident, r) in self.residents.iter().enumerate() {
            if r.is_rising_chief() {
                state.assign_free(last_block, resident);
                chiefs += 1;
            }
        }
        debug!(
            event = "rising_chief_prepass",
            block = last_block + 1,
            residents = chiefs,
        );

        let rules = RuleBook::new(&self.services, &self.residents, blocks, &self.config.rules);
        let seed = self.config.search.random_seed;
        let order = block_resident_order(
            &rules,
            &state,
            &self.services,
            &self.residents,
            randomize,
            seed,
        );
        debug!(
            event = "variable_order",
            pairs = order.len(),
            first_block = order.first().map(|p| p.block + 1).unwrap_or(0),
            randomize = randomize,
        );

        info!(
            event = "search_start",
            resident_count = self.residents.len(),
            service_count = self.services.len(),
            block_count = blocks,
            weeks_per_year = program.weeks_per_year(),
            pair_count = order.len(),
            seed = seed,
            randomize = randomize,
        );

        let mut stats = SearchStats::default();
        stats.start();
        let mut backtracker = Backtracker {
            services: &self.services,
            residents: &self.residents,
            rules,
            order: &order,
            expected_rates: &self.expected_rates,
            verbose,
            stats,
        };
        let found = backtracker.run(&mut state);
        let mut stats = backtracker.stats;
        stats.finish();

        info!(
            event = "search_end",
            feasible = found,
            nodes = stats.nodes(),
            backtracks = stats.backtracks,
            free_blocks = stats.free_blocks,
            dead_ends = stats.dead_ends,
            duration_ms = duration_ms(stats.elapsed()),
        );

        let schedule = found.then(|| state.snapshot());
        self.solved = found;
        self.state = Some(state);
        self.last_stats = Some(stats);
        Ok(schedule)
    }

    /// Resident view of the last successful search: `[resident][block]`.
    ///
    /// `None` before any search and after a failed one.
    pub fn schedule(&self) -> Option<&[Vec<Slot>]> {
        self.solved_state().map(ScheduleState::resident_rows)
    }

    /// Service view of the last successful search: residents on each
    /// service in each block.
    pub fn service_schedule(&self) -> Option<Vec<Vec<Roster>>> {
        self.solved_state().map(|state| {
            (0..state.service_count())
                .map(|s| {
                    (0..state.blocks_per_year())
                        .map(|b| Roster::from_slice(state.residents_on(s, b)))
                        .collect()
                })
                .collect()
        })
    }

    /// Statistics of the most recent search, successful or not.
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    fn solved_state(&self) -> Option<&ScheduleState> {
        self.state.as_ref().filter(|_| self.solved)
    }

    /// Maps history entries onto sorted resident indices.
    fn resolve_history(
        &self,
        history: &ServiceHistory,
    ) -> Result<Vec<(ResidentIndex, usize, u32)>> {
        let service_count = self.services.len();
        let mut resolved = Vec::new();
        for (id, service, count) in history.entries() {
            let resident = self
                .resident_index(id)
                .ok_or(RotaForgeError::UnknownResident(id))?;
            if service >= service_count {
                return Err(RotaForgeError::ServiceIndexOutOfRange {
                    index: service,
                    service_count,
                });
            }
            resolved.push((resident, service, count));
        }
        Ok(resolved)
    }
}

fn duration_ms(elapsed: Duration) -> u64 {
    elapsed.as_millis().min(u64::MAX as u128) as u64
}

#[cfg(test)]
mod tests;
