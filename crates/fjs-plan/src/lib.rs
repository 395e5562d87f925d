//! `fjs-plan`: turns a [`Workshop`] into a feasible machine/time schedule.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`workshop`]   | `Workshop` (entity store + routing index, cascades)       |
//! | [`selector`]   | `RouteSelector`, `WorkPlan`, `WorkPlanEntry`, `JobRoutes` |
//! | [`grid`]       | `PlanGrid`, `Cell`, `FillReport`, `Placement`             |
//! | [`export`]     | `ScheduleRecord`, `export_schedule`                       |
//! | [`scheduler`]  | `Scheduler`, `ScheduleRun`                                |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! Workshop ──RouteSelector──▶ WorkPlan ──PlanGrid::fill_all──▶ grid ──export──▶ records
//! ```
//!
//! The scheduler is greedy: one route per operation, one pass over the
//! `(job, position)`-sorted plan, no backtracking.  Placed intervals never
//! overlap on a machine and a job's operations never start before their
//! predecessor ends.

pub mod error;
pub mod export;
pub mod grid;
pub mod scheduler;
pub mod selector;
pub mod workshop;


pub use error::{PlanError, PlanResult};
pub use export::{ScheduleRecord, export_schedule};
pub use grid::{Cell, FillReport, Placement, PlanGrid, SkippedEntry};
pub use scheduler::{ScheduleRun, Scheduler};
pub use selector::{JobFailure, JobRoutes, RouteSelector, WorkPlan, WorkPlanEntry};
pub use workshop::Workshop;
