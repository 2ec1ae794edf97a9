//! Service counts carried over from earlier program years.

use std::collections::HashMap;

use rotaforge_core::{ResidentId, ServiceIndex};

/// How many blocks each resident has already spent on each service.
///
/// Keyed by resident identity so the scheduler's own resident ordering
/// cannot misattribute history. Any resident past their first year almost
/// certainly needs an entry.
///
/// # Example
///
/// ```
/// use rotaforge_core::Resident;
/// use rotaforge_solver::ServiceHistory;
///
/// let senior = Resident::new("Ana", "Ruiz", 3);
/// let history = ServiceHistory::new().with_count(senior.id(), 0, 2);
///
/// assert_eq!(history.count(senior.id(), 0), 2);
/// assert_eq!(history.count(senior.id(), 1), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceHistory {
    counts: HashMap<ResidentId, HashMap<ServiceIndex, u32>>,
}

impl ServiceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a prior count, replacing any earlier entry for the pair.
    pub fn set_count(&mut self, resident: ResidentId, service: ServiceIndex, count: u32) {
        self.counts
            .entry(resident)
            .or_default()
            .insert(service, count);
    }

    /// Builder form of [`set_count`](Self::set_count).
    pub fn with_count(mut self, resident: ResidentId, service: ServiceIndex, count: u32) -> Self {
        self.set_count(resident, service, count);
        self
    }

    /// Prior count for the pair; zero when absent.
    pub fn count(&self, resident: ResidentId, service: ServiceIndex) -> u32 {
        self.counts
            .get(&resident)
            .and_then(|per_service| per_service.get(&service))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every recorded `(resident, service, count)` entry.
    pub fn entries(&self) -> impl Iterator<Item = (ResidentId, ServiceIndex, u32)> + '_ {
        self.counts.iter().flat_map(|(&resident, per_service)| {
            per_service
                .iter()
                .map(move |(&service, &count)| (resident, service, count))
        })
    }
}
