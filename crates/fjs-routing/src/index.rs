//! `RoutingIndex`: a fixed-size array of route chains keyed by machine.

use fjs_core::config::DEFAULT_TABLE_SIZE;
use fjs_core::{MachineId, OperationId};
use tracing::debug;

use crate::{Route, RoutingError, RoutingResult};

// ── Bucket ────────────────────────────────────────────────────────────────────

/// One chain of the index.  Routes keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct Bucket {
    routes: Vec<Route>,
}

impl Bucket {
    /// Live route count.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

// ── RoutingIndex ──────────────────────────────────────────────────────────────

/// Hashed multimap from machine id to routing alternatives.
///
/// Iteration order is deterministic: buckets ascending, then insertion order
/// within a bucket.  Route selection relies on this for its first-encountered
/// tie-break.
#[derive(Clone, Debug)]
pub struct RoutingIndex {
    buckets: Vec<Bucket>,
}

impl Default for RoutingIndex {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}

impl RoutingIndex {
    /// Create an index with `table_size` buckets (at least one).
    pub fn new(table_size: usize) -> Self {
        Self { buckets: vec![Bucket::default(); table_size.max(1)] }
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for `machine`: `(machine - 1) mod table_size`.  Machine 0
    /// wraps to the last bucket.
    #[inline]
    pub fn bucket_of(&self, machine: MachineId) -> usize {
        let n = self.buckets.len();
        (machine.0 as usize % n + n - 1) % n
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append `route` to its machine's bucket.
    ///
    /// Fails without mutating the index if a route for the same
    /// `(operation, machine)` already exists or if `route.duration` is zero.
    pub fn insert(&mut self, route: Route) -> RoutingResult<()> {
        if route.duration == 0 {
            return Err(RoutingError::ZeroDuration {
                operation: route.operation,
                machine:   route.machine,
            });
        }
        let b = self.bucket_of(route.machine);
        let bucket = &mut self.buckets[b];
        if bucket.routes.iter().any(|r| r.matches(route.operation, route.machine)) {
            return Err(RoutingError::DuplicateRoute {
                operation: route.operation,
                machine:   route.machine,
            });
        }
        bucket.routes.push(route);
        debug!(
            operation = route.operation.0,
            machine = route.machine.0,
            duration = route.duration,
            bucket = b,
            load = bucket.routes.len(),
            "route inserted"
        );
        Ok(())
    }

    /// Overwrite the duration of an existing route.  Returns the previous
    /// duration.
    pub fn update_duration(
        &mut self,
        operation: OperationId,
        machine:   MachineId,
        duration:  u32,
    ) -> RoutingResult<u32> {
        if duration == 0 {
            return Err(RoutingError::ZeroDuration { operation, machine });
        }
        let b = self.bucket_of(machine);
        let route = self.buckets[b]
            .routes
            .iter_mut()
            .find(|r| r.matches(operation, machine))
            .ok_or(RoutingError::RouteNotFound { operation, machine })?;
        Ok(std::mem::replace(&mut route.duration, duration))
    }

    /// Remove the route for `(operation, machine)`.
    pub fn remove(&mut self, operation: OperationId, machine: MachineId) -> RoutingResult<Route> {
        let b = self.bucket_of(machine);
        let routes = &mut self.buckets[b].routes;
        let idx = routes
            .iter()
            .position(|r| r.matches(operation, machine))
            .ok_or(RoutingError::RouteNotFound { operation, machine })?;
        Ok(routes.remove(idx))
    }

    /// Remove every route of `operation`.
    ///
    /// Routes of one operation are spread over the buckets of their machines,
    /// so this scans the whole table.  Returns the number removed.
    pub fn delete_by_operation(&mut self, operation: OperationId) -> usize {
        let removed = self.retain(|r| r.operation != operation);
        debug!(operation = operation.0, removed, "routes deleted by operation");
        removed
    }

    /// Remove every route running on `machine`.  Returns the number removed.
    pub fn delete_by_machine(&mut self, machine: MachineId) -> usize {
        let removed = self.retain(|r| r.machine != machine);
        debug!(machine = machine.0, removed, "routes deleted by machine");
        removed
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.routes.clear();
        }
    }

    fn retain(&mut self, mut keep: impl FnMut(&Route) -> bool) -> usize {
        let mut removed = 0;
        for bucket in &mut self.buckets {
            let before = bucket.routes.len();
            bucket.routes.retain(|r| keep(r));
            removed += before - bucket.routes.len();
        }
        removed
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn lookup(&self, operation: OperationId, machine: MachineId) -> Option<&Route> {
        self.buckets[self.bucket_of(machine)]
            .routes
            .iter()
            .find(|r| r.matches(operation, machine))
    }

    /// All routes of `operation`, in index iteration order.
    pub fn routes_for_operation(&self, operation: OperationId) -> impl Iterator<Item = &Route> + '_ {
        self.iter().filter(move |r| r.operation == operation)
    }

    /// All routes running on `machine`.  Touches a single bucket.
    pub fn routes_for_machine(&self, machine: MachineId) -> impl Iterator<Item = &Route> + '_ {
        self.buckets[self.bucket_of(machine)]
            .routes
            .iter()
            .filter(move |r| r.machine == machine)
    }

    /// Every route: buckets ascending, insertion order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Route> + '_ {
        self.buckets.iter().flat_map(|b| b.routes.iter())
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Live route count per bucket.
    pub fn bucket_loads(&self) -> Vec<usize> {
        self.buckets.iter().map(Bucket::len).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }
}
