//! Completed schedules handed back to callers.

use rotaforge_core::{BlockIndex, ResidentIndex, ServiceIndex};

use crate::state::{Roster, Slot};

/// Owned snapshot of a globally valid schedule.
///
/// Indices refer to the scheduler's service list and its sorted resident
/// list. Rendering is left to callers; this type only exposes the raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    resident_view: Vec<Vec<Slot>>,
    service_view: Vec<Vec<Roster>>,
    service_counts: Vec<Vec<u32>>,
}

/// Per-block head count of one service over the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOccupancy {
    pub service: ServiceIndex,
    /// Seniors on the service in each block.
    pub per_block: Vec<usize>,
    /// Fewest seniors in any block.
    pub min: usize,
    /// Most seniors in any block.
    pub max: usize,
}

impl Schedule {
    pub(crate) fn new(
        resident_view: Vec<Vec<Slot>>,
        service_view: Vec<Vec<Roster>>,
        service_counts: Vec<Vec<u32>>,
    ) -> Self {
        Self {
            resident_view,
            service_view,
            service_counts,
        }
    }

    pub fn resident_count(&self) -> usize {
        self.resident_view.len()
    }

    pub fn service_count(&self) -> usize {
        self.service_view.len()
    }

    pub fn blocks_per_year(&self) -> usize {
        self.resident_view
            .first()
            .map(Vec::len)
            .or_else(|| self.service_view.first().map(Vec::len))
            .unwrap_or(0)
    }

    pub fn slot(&self, resident: ResidentIndex, block: BlockIndex) -> Slot {
        self.resident_view[resident][block]
    }

    /// The resident's year, one slot per block.
    pub fn resident_row(&self, resident: ResidentIndex) -> &[Slot] {
        &self.resident_view[resident]
    }

    /// Full resident view, `[resident][block]`.
    pub fn resident_view(&self) -> &[Vec<Slot>] {
        &self.resident_view
    }

    /// Resident view in flat index encoding (see [`Slot::index`]).
    pub fn raw_resident_view(&self) -> Vec<Vec<Option<usize>>> {
        let service_count = self.service_count();
        self.resident_view
            .iter()
            .map(|row| row.iter().map(|slot| slot.index(service_count)).collect())
            .collect()
    }

    pub fn residents_on(&self, service: ServiceIndex, block: BlockIndex) -> &[ResidentIndex] {
        &self.service_view[service][block]
    }

    pub fn occupancy(&self, service: ServiceIndex, block: BlockIndex) -> usize {
        self.service_view[service][block].len()
    }

    /// Year-end count of `service` for `resident`, prior history included.
    pub fn service_count_for(&self, resident: ResidentIndex, service: ServiceIndex) -> u32 {
        self.service_counts[resident][service]
    }

    /// Year-end counts, `[resident][service]`.
    pub fn service_counts(&self) -> &[Vec<u32>] {
        &self.service_counts
    }

    /// Number of free blocks the resident received this year.
    pub fn free_blocks_for(&self, resident: ResidentIndex) -> usize {
        self.resident_view[resident]
            .iter()
            .filter(|slot| **slot == Slot::Free)
            .count()
    }

    /// Head count per service per block, with the yearly min and max.
    pub fn occupancy_summary(&self) -> Vec<ServiceOccupancy> {
        self.service_view
            .iter()
            .enumerate()
            .map(|(service, blocks)| {
                let per_block: Vec<usize> = blocks.iter().map(|roster| roster.len()).collect();
                ServiceOccupancy {
                    service,
                    min: per_block.iter().copied().min().unwrap_or(0),
                    max: per_block.iter().copied().max().unwrap_or(0),
                    per_block,
                }
            })
            .collect()
    }
}
