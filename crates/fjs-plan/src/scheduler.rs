//! Fluent driver for one scheduling run.

use fjs_core::{Objective, PlacementPolicy, ShopConfig};
use tracing::info;

use crate::export::{ScheduleRecord, export_schedule};
use crate::grid::{FillReport, PlanGrid};
use crate::selector::{JobFailure, RouteSelector, WorkPlan};
use crate::{PlanResult, Workshop};

/// Runs route selection, grid placement and export against a [`Workshop`].
///
/// # Defaults
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.objective(o)` | `config.objective` (Minimize)    |
/// | `.placement(p)` | `config.placement` (Retry)       |
///
/// # Example
///
/// ```rust,ignore
/// let run = Scheduler::for_workshop(&workshop)
///     .objective(Objective::Maximize)
///     .run(&workshop)?;
/// for rec in &run.records { println!("{rec:?}"); }
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler {
    config: ShopConfig,
}

/// Everything one run produced.
#[derive(Debug)]
pub struct ScheduleRun {
    pub work_plan: WorkPlan,
    pub fill:      FillReport,
    pub grid:      PlanGrid,
    pub records:   Vec<ScheduleRecord>,
}

impl ScheduleRun {
    /// Latest end time across all placed operations (0 for an empty run).
    pub fn makespan(&self) -> u32 {
        self.grid.makespan().unwrap_or(0)
    }

    /// Jobs the selector could not route.
    pub fn job_failures(&self) -> &[JobFailure] {
        &self.work_plan.failures
    }

    /// `true` if every job was routed and every entry placed.
    pub fn is_complete(&self) -> bool {
        self.work_plan.failures.is_empty() && self.fill.is_complete()
    }
}

impl Scheduler {
    pub fn new(config: ShopConfig) -> Self {
        Self { config }
    }

    /// Scheduler using the configuration `shop` was built with.
    pub fn for_workshop(shop: &Workshop) -> Self {
        Self::new(shop.config().clone())
    }

    pub fn objective(mut self, objective: Objective) -> Self {
        self.config.objective = objective;
        self
    }

    pub fn placement(mut self, placement: PlacementPolicy) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Build a fresh grid and schedule every routable job of `shop` on it.
    pub fn run(&self, shop: &Workshop) -> PlanResult<ScheduleRun> {
        self.config.validate()?;

        let work_plan =
            RouteSelector::new(shop.store(), shop.routes(), self.config.objective).build();

        let mut grid = PlanGrid::from_config(&self.config)?;
        let fill = grid.fill_all(&work_plan.entries, self.config.placement);
        let records = export_schedule(&grid);

        info!(
            jobs = shop.store().job_count(),
            unroutable = work_plan.failures.len(),
            placed = fill.placed.len(),
            skipped = fill.skipped.len(),
            makespan = grid.makespan().unwrap_or(0),
            "scheduling run finished"
        );

        Ok(ScheduleRun { work_plan, fill, grid, records })
    }
}
