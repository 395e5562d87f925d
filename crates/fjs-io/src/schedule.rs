//! Schedule export: `MachineID;JobID;OperationID;StartTime;EndTime`.

use std::fs;
use std::path::Path;

use fjs_plan::ScheduleRecord;

use crate::data::Format;
use crate::row::ScheduleRow;
use crate::{IoResult, binary, text};

/// Convert export records to rows, preserving their order.
pub fn schedule_rows(records: &[ScheduleRecord]) -> Vec<ScheduleRow> {
    records.iter().map(ScheduleRow::from).collect()
}

/// Write the schedule to `path` in `format`.
pub fn write_schedule(path: &Path, records: &[ScheduleRecord], format: Format) -> IoResult<()> {
    let rows = schedule_rows(records);
    let bytes = match format {
        Format::Text => text::to_bytes(&rows)?,
        Format::Binary => binary::to_bytes(&rows)?,
    };
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a schedule previously written by [`write_schedule`].
pub fn read_schedule(path: &Path, format: Format) -> IoResult<Vec<ScheduleRow>> {
    let bytes = fs::read(path)?;
    match format {
        Format::Text => Ok(text::read_records(bytes.as_slice())?.rows),
        Format::Binary => binary::from_bytes(&bytes),
    }
}
