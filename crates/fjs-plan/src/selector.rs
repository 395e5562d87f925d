//! Greedy route selection: one concrete route per operation.
//!
//! # Algorithm
//!
//! For each job, walk its operations in position order.  For each operation
//! scan every route in the routing index (buckets ascending, chain order
//! within a bucket) and keep the one with the minimum (or maximum) duration.
//! Ties keep the first route encountered.
//!
//! A job with any routeless operation is reported as a failure for that job
//! only; the remaining jobs still make it into the [`WorkPlan`].
//!
//! # Complexity
//! O(n · r) where n = operations and r = total routes.

use fjs_core::{EntityStore, JobId, MachineId, Objective, OperationId, ShopError};
use fjs_routing::{Route, RoutingIndex};
use tracing::{debug, warn};

use crate::{PlanError, PlanResult};

// ── WorkPlan types ────────────────────────────────────────────────────────────

/// One selected route, annotated with the operation's position in its job.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkPlanEntry {
    pub job:       JobId,
    pub operation: OperationId,
    pub machine:   MachineId,
    pub duration:  u32,
    pub position:  u32,
}

/// The routes chosen for one job, in position order.
#[derive(Clone, Debug)]
pub struct JobRoutes {
    pub job:            JobId,
    pub entries:        Vec<WorkPlanEntry>,
    /// Sum of the selected durations.
    pub total_duration: u64,
}

/// A job that could not be routed.
#[derive(Debug)]
pub struct JobFailure {
    pub job:   JobId,
    pub error: PlanError,
}

/// Selected routes across all schedulable jobs, sorted by `(job, position)`.
#[derive(Debug, Default)]
pub struct WorkPlan {
    pub entries:  Vec<WorkPlanEntry>,
    pub jobs:     Vec<JobRoutes>,
    pub failures: Vec<JobFailure>,
}

impl WorkPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Summed duration for `job`, if it was routed.
    pub fn total_for(&self, job: JobId) -> Option<u64> {
        self.jobs.iter().find(|j| j.job == job).map(|j| j.total_duration)
    }
}

// ── RouteSelector ─────────────────────────────────────────────────────────────

/// Picks one route per operation from a [`RoutingIndex`].
#[derive(Clone, Copy, Debug)]
pub struct RouteSelector<'a> {
    store:     &'a EntityStore,
    routes:    &'a RoutingIndex,
    objective: Objective,
}

impl<'a> RouteSelector<'a> {
    pub fn new(store: &'a EntityStore, routes: &'a RoutingIndex, objective: Objective) -> Self {
        Self { store, routes, objective }
    }

    /// Best route for `operation` under the selector's objective, or `None`
    /// if the operation has no routes.
    pub fn select_route(&self, operation: OperationId) -> Option<&'a Route> {
        let mut best: Option<&'a Route> = None;
        for route in self.routes.routes_for_operation(operation) {
            match best {
                Some(b) if !self.objective.prefers(route.duration, b.duration) => {}
                _ => best = Some(route),
            }
        }
        best
    }

    /// Select routes for every operation of `job`.
    pub fn select_job(&self, job: JobId) -> PlanResult<JobRoutes> {
        if !self.store.contains_job(job) {
            return Err(ShopError::JobNotFound(job).into());
        }
        let mut out = JobRoutes { job, entries: Vec::new(), total_duration: 0 };
        for &op_id in self.store.operations_of_job(job) {
            let route = self
                .select_route(op_id)
                .ok_or(PlanError::NoRoutes { job, operation: op_id })?;
            let position = self
                .store
                .operation(op_id)
                .map(|o| o.position)
                .ok_or(ShopError::OperationNotFound(op_id))?;
            out.total_duration += route.duration as u64;
            out.entries.push(WorkPlanEntry {
                job,
                operation: op_id,
                machine: route.machine,
                duration: route.duration,
                position,
            });
        }
        Ok(out)
    }

    /// Route every job.  Failures are collected, not propagated.
    pub fn build(&self) -> WorkPlan {
        let mut plan = WorkPlan::default();
        for job in self.store.jobs() {
            match self.select_job(job.id) {
                Ok(routes) => {
                    debug!(
                        job = job.id.0,
                        operations = routes.entries.len(),
                        total = routes.total_duration,
                        "job routed"
                    );
                    plan.entries.extend_from_slice(&routes.entries);
                    plan.jobs.push(routes);
                }
                Err(error) => {
                    warn!(job = job.id.0, %error, "job cannot be scheduled");
                    plan.failures.push(JobFailure { job: job.id, error });
                }
            }
        }
        plan.entries.sort_by_key(|e| (e.job, e.position));
        plan
    }
}
