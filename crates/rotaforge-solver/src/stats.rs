//! Search statistics.
//!
//! Plain counters for one backtracking run.

use std::time::{Duration, Instant};

/// Counters collected during one `create` call.
///
/// # Example
///
/// ```
/// use rotaforge_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_assignment();
/// stats.record_assignment();
/// stats.record_backtrack();
///
/// assert_eq!(stats.assignments, 2);
/// assert_eq!(stats.backtracks, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finished_in: Option<Duration>,
    /// Service assignments committed.
    pub assignments: u64,
    /// Free blocks granted by the fallback.
    pub free_blocks: u64,
    /// Commits (service or free) undone while backtracking.
    pub backtracks: u64,
    /// Pairs that ran out of candidates.
    pub dead_ends: u64,
    /// Complete schedules rejected by the staffing check.
    pub rejected_schedules: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished_in = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished_in = Some(self.elapsed());
    }

    /// Time spent searching; frozen once [`finish`](Self::finish) is called.
    pub fn elapsed(&self) -> Duration {
        self.finished_in
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_assignment(&mut self) {
        self.assignments += 1;
    }

    pub fn record_free_block(&mut self) {
        self.free_blocks += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    pub fn record_rejected_schedule(&mut self) {
        self.rejected_schedules += 1;
    }

    /// Total commits, service and free.
    pub fn nodes(&self) -> u64 {
        self.assignments + self.free_blocks
    }
}
