//! Plain data row types shared by the text and binary backends.
//!
//! Every row is a flat struct of `u32` fields.  The serde names are the CSV
//! column headers; in the binary form the same fields are written in
//! declaration order as fixed 4-byte little-endian integers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use fjs_core::{Job, Machine, Operation};
use fjs_plan::ScheduleRecord;
use fjs_routing::Route;

/// A persisted collection element.
pub trait Record: Serialize + DeserializeOwned {
    /// File name without extension (`jobs`, `routes`, …).
    const STEM: &'static str;

    /// Column names, in field order.
    const HEADER: &'static [&'static str];

    /// Size of one binary record in bytes.
    fn record_size() -> usize {
        4 * Self::HEADER.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobRow {
    #[serde(rename = "ID")]
    pub id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MachineRow {
    #[serde(rename = "ID")]
    pub id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationRow {
    #[serde(rename = "ID")]
    pub id:       u32,
    #[serde(rename = "JobID")]
    pub job_id:   u32,
    #[serde(rename = "Position")]
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteRow {
    #[serde(rename = "OperationID")]
    pub operation_id: u32,
    #[serde(rename = "MachineID")]
    pub machine_id:   u32,
    #[serde(rename = "Duration")]
    pub duration:     u32,
}

/// One exported schedule interval `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "MachineID")]
    pub machine_id:   u32,
    #[serde(rename = "JobID")]
    pub job_id:       u32,
    #[serde(rename = "OperationID")]
    pub operation_id: u32,
    #[serde(rename = "StartTime")]
    pub start_time:   u32,
    #[serde(rename = "EndTime")]
    pub end_time:     u32,
}

impl Record for JobRow {
    const STEM: &'static str = "jobs";
    const HEADER: &'static [&'static str] = &["ID"];
}

impl Record for MachineRow {
    const STEM: &'static str = "machines";
    const HEADER: &'static [&'static str] = &["ID"];
}

impl Record for OperationRow {
    const STEM: &'static str = "operations";
    const HEADER: &'static [&'static str] = &["ID", "JobID", "Position"];
}

impl Record for RouteRow {
    const STEM: &'static str = "routes";
    const HEADER: &'static [&'static str] = &["OperationID", "MachineID", "Duration"];
}

impl Record for ScheduleRow {
    const STEM: &'static str = "schedule";
    const HEADER: &'static [&'static str] =
        &["MachineID", "JobID", "OperationID", "StartTime", "EndTime"];
}

// ── Domain conversions ────────────────────────────────────────────────────────

impl From<&Job> for JobRow {
    fn from(j: &Job) -> Self {
        Self { id: j.id.0 }
    }
}

impl From<&Machine> for MachineRow {
    fn from(m: &Machine) -> Self {
        Self { id: m.id.0 }
    }
}

impl From<&Operation> for OperationRow {
    fn from(o: &Operation) -> Self {
        Self { id: o.id.0, job_id: o.job.0, position: o.position }
    }
}

impl From<&Route> for RouteRow {
    fn from(r: &Route) -> Self {
        Self {
            operation_id: r.operation.0,
            machine_id:   r.machine.0,
            duration:     r.duration,
        }
    }
}

impl From<&ScheduleRecord> for ScheduleRow {
    fn from(r: &ScheduleRecord) -> Self {
        Self {
            machine_id:   r.machine.0,
            job_id:       r.job.0,
            operation_id: r.operation.0,
            start_time:   r.start,
            end_time:     r.end,
        }
    }
}
