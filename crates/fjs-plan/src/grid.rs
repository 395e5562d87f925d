//! `PlanGrid`: machine × time occupancy matrix.
//!
//! # Layout
//!
//! Row-major `Vec<Cell>` of `machine_count × horizon` cells.  Machine `m`
//! owns row `m - 1`; column `t` is the time unit `[t, t + 1)`.  A placed
//! interval `[start, start + duration)` marks each of its cells with the
//! owning `(job, operation)` and the absolute end `start + duration`.
//!
//! Cells only ever go `Empty → Occupied` within one scheduling run; a fresh
//! grid (or [`PlanGrid::reset`]) starts the next run.
//!
//! # Cost
//!
//! `last_end_on_machine` scans one row and `last_end_of_job` scans the whole
//! grid, so each placement in [`PlanGrid::fill_all`] is O(machines × horizon).
//! At the configured sizes (≈ 8 × 35) this is a few hundred cell reads.

use std::collections::BTreeSet;

use fjs_core::{JobId, MachineId, OperationId, PlacementPolicy, ShopConfig};
use tracing::{debug, warn};

use crate::selector::WorkPlanEntry;
use crate::{PlanError, PlanResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied {
        job:       JobId,
        operation: OperationId,
        /// Absolute end time of the interval this cell belongs to.
        end:       u32,
    },
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// `(job, operation)` owning this cell, if occupied.
    #[inline]
    pub fn owner(&self) -> Option<(JobId, OperationId)> {
        match *self {
            Cell::Occupied { job, operation, .. } => Some((job, operation)),
            Cell::Empty => None,
        }
    }

    #[inline]
    pub fn end(&self) -> Option<u32> {
        match *self {
            Cell::Occupied { end, .. } => Some(end),
            Cell::Empty => None,
        }
    }
}

// ── Fill report ───────────────────────────────────────────────────────────────

/// A work-plan entry that made it onto the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub entry: WorkPlanEntry,
    pub start: u32,
}

impl Placement {
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.entry.duration
    }
}

/// A work-plan entry `fill_all` had to leave out.
#[derive(Debug)]
pub struct SkippedEntry {
    pub entry: WorkPlanEntry,
    pub error: PlanError,
}

/// Outcome of [`PlanGrid::fill_all`].
#[derive(Debug, Default)]
pub struct FillReport {
    pub placed:  Vec<Placement>,
    pub skipped: Vec<SkippedEntry>,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn placement_of(&self, operation: OperationId) -> Option<&Placement> {
        self.placed.iter().find(|p| p.entry.operation == operation)
    }
}

// ── PlanGrid ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlanGrid {
    machine_count: u32,
    horizon:       u32,
    cells:         Vec<Cell>,
}

impl PlanGrid {
    /// Allocate an empty grid.
    ///
    /// Allocation failure is reported as [`PlanError::Allocation`] rather
    /// than aborting.
    pub fn new(machine_count: u32, horizon: u32) -> PlanResult<Self> {
        let len = (machine_count as usize)
            .checked_mul(horizon as usize)
            .ok_or(PlanError::Allocation { cells: usize::MAX })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| PlanError::Allocation { cells: len })?;
        cells.resize(len, Cell::Empty);
        Ok(Self { machine_count, horizon, cells })
    }

    pub fn from_config(config: &ShopConfig) -> PlanResult<Self> {
        Self::new(config.machine_count, config.horizon)
    }

    pub fn machine_count(&self) -> u32 {
        self.machine_count
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Set every cell back to empty.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    // ── Addressing ────────────────────────────────────────────────────────

    fn row_index(&self, machine: MachineId) -> PlanResult<usize> {
        machine
            .row()
            .filter(|r| *r < self.machine_count as usize)
            .ok_or(PlanError::MachineOutOfRange { machine, machine_count: self.machine_count })
    }

    /// The cells of `machine`'s row.
    pub fn row(&self, machine: MachineId) -> PlanResult<&[Cell]> {
        let r = self.row_index(machine)?;
        let w = self.horizon as usize;
        Ok(&self.cells[r * w..(r + 1) * w])
    }

    pub fn cell(&self, machine: MachineId, time: u32) -> Option<&Cell> {
        let row = self.row(machine).ok()?;
        row.get(time as usize)
    }

    /// Validate `[start, start + duration)` on `machine` and return the
    /// corresponding cell range.
    fn span(&self, machine: MachineId, start: u32, duration: u32) -> PlanResult<std::ops::Range<usize>> {
        let r = self.row_index(machine)?;
        let end = start
            .checked_add(duration)
            .filter(|e| *e <= self.horizon)
            .ok_or(PlanError::OutOfHorizon { start, duration, horizon: self.horizon })?;
        let base = r * self.horizon as usize;
        Ok(base + start as usize..base + end as usize)
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// `true` if any cell of `[start, start + duration)` on `machine` is
    /// occupied.
    pub fn is_occupied(&self, machine: MachineId, start: u32, duration: u32) -> PlanResult<bool> {
        let span = self.span(machine, start, duration)?;
        Ok(self.cells[span].iter().any(|c| !c.is_empty()))
    }

    /// Mark `[start, start + duration)` on `machine` as belonging to
    /// `(job, operation)`.
    ///
    /// Fails without touching the grid if the interval is empty, leaves the
    /// grid, or overlaps an occupied cell.
    pub fn place(
        &mut self,
        machine:   MachineId,
        job:       JobId,
        operation: OperationId,
        start:     u32,
        duration:  u32,
    ) -> PlanResult<()> {
        if duration == 0 {
            return Err(PlanError::EmptyInterval { operation });
        }
        let span = self.span(machine, start, duration)?;
        if self.cells[span.clone()].iter().any(|c| !c.is_empty()) {
            return Err(PlanError::Overlap { machine, start, duration });
        }
        let end = start + duration;
        self.cells[span].fill(Cell::Occupied { job, operation, end });
        Ok(())
    }

    /// Latest end time on `machine`, or `None` if its row is empty or the
    /// machine is outside the grid.
    pub fn last_end_on_machine(&self, machine: MachineId) -> Option<u32> {
        self.row(machine).ok()?.iter().filter_map(Cell::end).max()
    }

    /// Latest end time of any operation of `job`, or `None` if the job has
    /// nothing on the grid.
    pub fn last_end_of_job(&self, job: JobId) -> Option<u32> {
        self.cells
            .iter()
            .filter_map(|c| match *c {
                Cell::Occupied { job: j, end, .. } if j == job => Some(end),
                _ => None,
            })
            .max()
    }

    /// Latest end time on the whole grid.
    pub fn makespan(&self) -> Option<u32> {
        self.cells.iter().filter_map(Cell::end).max()
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    // ── Fill ──────────────────────────────────────────────────────────────

    /// Place every entry of a `(job, position)`-sorted work plan.
    ///
    /// Under [`PlacementPolicy::Retry`] the search starts at the job's last
    /// end and advances one unit at a time past occupied cells, so an entry
    /// can fill an earlier gap on its machine.  Under
    /// [`PlacementPolicy::Skip`] the entry gets one attempt at the later of
    /// its machine's last end and its job's last end, and is dropped if that
    /// interval does not fit.  Once an entry of a job is dropped, the job's
    /// later entries are dropped too.
    pub fn fill_all(&mut self, plan: &[WorkPlanEntry], policy: PlacementPolicy) -> FillReport {
        let mut report = FillReport::default();
        let mut broken: BTreeSet<JobId> = BTreeSet::new();

        for entry in plan {
            if broken.contains(&entry.job) {
                report.skipped.push(SkippedEntry {
                    entry: *entry,
                    error: PlanError::PredecessorUnplaced { job: entry.job, operation: entry.operation },
                });
                continue;
            }

            let job_end = self.last_end_of_job(entry.job).unwrap_or(0);
            let earliest = match policy {
                PlacementPolicy::Retry => job_end,
                PlacementPolicy::Skip => self.last_end_on_machine(entry.machine).unwrap_or(0).max(job_end),
            };

            match self.place_from(entry, earliest, policy) {
                Ok(start) => {
                    debug!(
                        job = entry.job.0,
                        operation = entry.operation.0,
                        machine = entry.machine.0,
                        start,
                        end = start + entry.duration,
                        "operation placed"
                    );
                    report.placed.push(Placement { entry: *entry, start });
                }
                Err(error) => {
                    warn!(
                        job = entry.job.0,
                        operation = entry.operation.0,
                        %error,
                        "operation not placed"
                    );
                    broken.insert(entry.job);
                    report.skipped.push(SkippedEntry { entry: *entry, error });
                }
            }
        }
        report
    }

    fn place_from(&mut self, entry: &WorkPlanEntry, earliest: u32, policy: PlacementPolicy) -> PlanResult<u32> {
        let mut start = earliest;
        loop {
            match self.place(entry.machine, entry.job, entry.operation, start, entry.duration) {
                Ok(()) => return Ok(start),
                Err(PlanError::Overlap { .. }) if policy == PlacementPolicy::Retry => start += 1,
                Err(e) => return Err(e),
            }
        }
    }
}
