//! Mutable search state: both schedule views plus the remaining counters.
//!
//! Every mutation goes through a strictly paired operation
//! (`assign`/`unassign`, `assign_free`/`unassign_free`) that updates the
//! resident view, the service view, the per-resident service counts and all
//! four remaining-counter families together. Counters are only computed by
//! scanning in [`ScheduleState::new`].

use rotaforge_config::StaffingTarget;
use rotaforge_core::{
    BlockIndex, CountRange, Resident, ResidentIndex, Service, ServiceIndex,
};
use smallvec::SmallVec;

use crate::schedule::Schedule;

/// Residents on one service in one block.
pub type Roster = SmallVec<[ResidentIndex; 4]>;

/// What a resident is doing in one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// Not decided yet.
    #[default]
    Unassigned,
    /// On the service with this index.
    Service(ServiceIndex),
    /// Explicitly free (elective); no service.
    Free,
}

impl Slot {
    #[inline]
    pub fn is_assigned(self) -> bool {
        !matches!(self, Slot::Unassigned)
    }

    #[inline]
    pub fn service(self) -> Option<ServiceIndex> {
        match self {
            Slot::Service(s) => Some(s),
            _ => None,
        }
    }

    /// Flat index encoding: a service index, `service_count` for a free
    /// block, `None` while unassigned.
    ///
    /// ```
    /// use rotaforge_solver::Slot;
    ///
    /// assert_eq!(Slot::Service(1).index(3), Some(1));
    /// assert_eq!(Slot::Free.index(3), Some(3));
    /// assert_eq!(Slot::Unassigned.index(3), None);
    /// ```
    pub fn index(self, service_count: usize) -> Option<usize> {
        match self {
            Slot::Unassigned => None,
            Slot::Service(s) => Some(s),
            Slot::Free => Some(service_count),
        }
    }
}

/// Schedule under construction together with its incremental bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    blocks_per_year: usize,
    staffing: Vec<CountRange>,
    /// `[resident][block]`
    resident_view: Vec<Vec<Slot>>,
    /// `[service][block]`
    service_view: Vec<Vec<Roster>>,
    /// `[resident][service]`
    service_counts: Vec<Vec<u32>>,
    remaining_residents_per_block: Vec<usize>,
    remaining_blocks_per_resident: Vec<usize>,
    /// `[service][block]`
    remaining_spots: Vec<Vec<usize>>,
    remaining_spots_per_block: Vec<usize>,
}

impl ScheduleState {
    /// Builds an empty schedule.
    ///
    /// Each service opens `min_seniors_per_block` or `max_seniors_per_block`
    /// spots per block depending on `target`. A resident's remaining-block
    /// count covers the current year plus one full year for every later
    /// program year, so counts stay comparable across years.
    pub fn new(
        services: &[Service],
        residents: &[Resident],
        blocks_per_year: usize,
        num_years: u32,
        target: StaffingTarget,
    ) -> Self {
        let resident_view = vec![vec![Slot::Unassigned; blocks_per_year]; residents.len()];
        let service_view = vec![vec![Roster::new(); blocks_per_year]; services.len()];
        let service_counts = vec![vec![0; services.len()]; residents.len()];

        let remaining_residents_per_block = (0..blocks_per_year)
            .map(|b| {
                resident_view
                    .iter()
                    .filter(|row| !row[b].is_assigned())
                    .count()
            })
            .collect();

        let remaining_blocks_per_resident = residents
            .iter()
            .zip(&resident_view)
            .map(|(resident, row)| {
                let open = row.iter().filter(|slot| !slot.is_assigned()).count();
                let years_left = num_years.saturating_sub(resident.year()) as usize + 1;
                open + years_left * blocks_per_year
            })
            .collect();

        let remaining_spots: Vec<Vec<usize>> = services
            .iter()
            .map(|service| {
                let spots = match target {
                    StaffingTarget::Minimum => service.min_seniors_per_block(),
                    StaffingTarget::Maximum => service.max_seniors_per_block(),
                };
                vec![spots as usize; blocks_per_year]
            })
            .collect();

        let remaining_spots_per_block = (0..blocks_per_year)
            .map(|b| remaining_spots.iter().map(|row| row[b]).sum())
            .collect();

        Self {
            blocks_per_year,
            staffing: services.iter().map(|s| s.senior_staffing).collect(),
            resident_view,
            service_view,
            service_counts,
            remaining_residents_per_block,
            remaining_blocks_per_resident,
            remaining_spots,
            remaining_spots_per_block,
        }
    }

    #[inline]
    pub fn blocks_per_year(&self) -> usize {
        self.blocks_per_year
    }

    #[inline]
    pub fn resident_count(&self) -> usize {
        self.resident_view.len()
    }

    #[inline]
    pub fn service_count(&self) -> usize {
        self.service_view.len()
    }

    #[inline]
    pub fn slot(&self, resident: ResidentIndex, block: BlockIndex) -> Slot {
        self.resident_view[resident][block]
    }

    /// The resident view, `[resident][block]`.
    #[inline]
    pub fn resident_rows(&self) -> &[Vec<Slot>] {
        &self.resident_view
    }

    /// Residents currently on `service` in `block`.
    #[inline]
    pub fn residents_on(&self, service: ServiceIndex, block: BlockIndex) -> &[ResidentIndex] {
        &self.service_view[service][block]
    }

    #[inline]
    pub fn occupancy(&self, service: ServiceIndex, block: BlockIndex) -> usize {
        self.service_view[service][block].len()
    }

    /// Times `resident` has been on `service`, history included.
    #[inline]
    pub fn times_assigned(&self, resident: ResidentIndex, service: ServiceIndex) -> u32 {
        self.service_counts[resident][service]
    }

    #[inline]
    pub fn remaining_residents_in_block(&self, block: BlockIndex) -> usize {
        self.remaining_residents_per_block[block]
    }

    #[inline]
    pub fn remaining_blocks_for_resident(&self, resident: ResidentIndex) -> usize {
        self.remaining_blocks_per_resident[resident]
    }

    #[inline]
    pub fn remaining_spots(&self, service: ServiceIndex, block: BlockIndex) -> usize {
        self.remaining_spots[service][block]
    }

    #[inline]
    pub fn remaining_spots_in_block(&self, block: BlockIndex) -> usize {
        self.remaining_spots_per_block[block]
    }

    /// Overwrites a resident's prior count for a service.
    ///
    /// Only meaningful before search starts.
    pub fn seed_count(&mut self, resident: ResidentIndex, service: ServiceIndex, count: u32) {
        self.service_counts[resident][service] = count;
    }

    /// Puts `resident` on `service` for `block`.
    ///
    /// The slot must be unassigned and the service must have an open spot.
    pub fn assign(&mut self, block: BlockIndex, resident: ResidentIndex, service: ServiceIndex) {
        debug_assert_eq!(self.resident_view[resident][block], Slot::Unassigned);
        debug_assert!(self.remaining_spots[service][block] > 0);

        self.resident_view[resident][block] = Slot::Service(service);
        self.service_view[service][block].push(resident);
        self.service_counts[resident][service] += 1;
        self.remaining_spots[service][block] -= 1;
        self.remaining_spots_per_block[block] -= 1;
        self.remaining_residents_per_block[block] -= 1;
        self.remaining_blocks_per_resident[resident] -= 1;
    }

    /// Exact inverse of [`assign`](Self::assign).
    pub fn unassign(&mut self, block: BlockIndex, resident: ResidentIndex, service: ServiceIndex) {
        debug_assert_eq!(self.resident_view[resident][block], Slot::Service(service));

        self.resident_view[resident][block] = Slot::Unassigned;
        let roster = &mut self.service_view[service][block];
        if let Some(pos) = roster.iter().position(|&r| r == resident) {
            roster.remove(pos);
        }
        self.service_counts[resident][service] -= 1;
        self.remaining_spots[service][block] += 1;
        self.remaining_spots_per_block[block] += 1;
        self.remaining_residents_per_block[block] += 1;
        self.remaining_blocks_per_resident[resident] += 1;
    }

    /// Gives `resident` a free block. Service capacity is untouched.
    pub fn assign_free(&mut self, block: BlockIndex, resident: ResidentIndex) {
        debug_assert_eq!(self.resident_view[resident][block], Slot::Unassigned);

        self.resident_view[resident][block] = Slot::Free;
        self.remaining_residents_per_block[block] -= 1;
        self.remaining_blocks_per_resident[resident] -= 1;
    }

    /// Exact inverse of [`assign_free`](Self::assign_free).
    pub fn unassign_free(&mut self, block: BlockIndex, resident: ResidentIndex) {
        debug_assert_eq!(self.resident_view[resident][block], Slot::Free);

        self.resident_view[resident][block] = Slot::Unassigned;
        self.remaining_residents_per_block[block] += 1;
        self.remaining_blocks_per_resident[resident] += 1;
    }

    /// Global acceptance check: every service is staffed within its
    /// per-block senior range in every block.
    pub fn is_valid(&self) -> bool {
        self.service_view
            .iter()
            .zip(&self.staffing)
            .all(|(blocks, range)| blocks.iter().all(|roster| range.contains(roster.len() as u32)))
    }

    /// Copies both views and the service counts out of the search state.
    pub fn snapshot(&self) -> Schedule {
        Schedule::new(
            self.resident_view.clone(),
            self.service_view.clone(),
            self.service_counts.clone(),
        )
    }
}
