//! `fjs-io`: persistence for the flexible job-shop scheduler.
//!
//! Two interchangeable representations share one field set per collection:
//!
//! | Backend    | Module      | Shape                                              |
//! |------------|-------------|----------------------------------------------------|
//! | Text       | [`text`]    | `;`-delimited CSV, header row, one record per line |
//! | Binary     | [`binary`]  | fixed-size `bincode` records, no header            |
//!
//! [`ShopData`] bundles the four input collections (jobs, machines,
//! operations, routes) and moves them in and out of a `Workshop`;
//! [`schedule`] writes the exported plan.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fjs_io::{Format, ShopData, write_schedule};
//!
//! let mut shop = Workshop::new(config)?;
//! let report = ShopData::import_into(Path::new("./data"), Format::Text, &mut shop)?;
//! let run = Scheduler::new(config).run(&shop)?;
//! write_schedule(Path::new("schedule.csv"), &run.records, Format::Text)?;
//! ```

pub mod binary;
pub mod data;
pub mod error;
pub mod row;
pub mod schedule;
pub mod text;

#[cfg(test)]
mod tests;

pub use data::{Format, ImportReport, ShopData};
pub use error::{IoError, IoResult};
pub use row::{JobRow, MachineRow, OperationRow, Record, RouteRow, ScheduleRow};
pub use schedule::{read_schedule, schedule_rows, write_schedule};
pub use text::ReadOutcome;
