//! Flatten a filled [`PlanGrid`] into schedule records.

use fjs_core::{JobId, MachineId, OperationId};

use crate::grid::PlanGrid;

/// One contiguous occupied run on a machine: `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleRecord {
    pub machine:   MachineId,
    pub job:       JobId,
    pub operation: OperationId,
    pub start:     u32,
    pub end:       u32,
}

impl ScheduleRecord {
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Scan the grid row by row and coalesce runs of cells owned by the same
/// `(job, operation)`.
///
/// Records come out ordered by machine ascending, then start ascending.
pub fn export_schedule(grid: &PlanGrid) -> Vec<ScheduleRecord> {
    let mut records = Vec::new();

    for m in 1..=grid.machine_count() {
        let machine = MachineId(m);
        let Ok(row) = grid.row(machine) else { continue };

        let mut t = 0usize;
        while t < row.len() {
            let Some((job, operation)) = row[t].owner() else {
                t += 1;
                continue;
            };
            let start = t;
            while t < row.len() && row[t].owner() == Some((job, operation)) {
                t += 1;
            }
            records.push(ScheduleRecord {
                machine,
                job,
                operation,
                start: start as u32,
                end:   t as u32,
            });
        }
    }
    records
}
