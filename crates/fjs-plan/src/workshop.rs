//! `Workshop`: the explicit state object owning the entity store and the
//! routing index.
//!
//! Every cross-structure rule lives here: routes may only reference known
//! operations and machines, and removing a job, operation or machine
//! cascades into the routing index.

use fjs_core::{EntityStore, JobId, MachineId, Operation, OperationId, ShopConfig, ShopError};
use fjs_routing::{Route, RoutingIndex};
use tracing::debug;

use crate::PlanResult;

#[derive(Clone, Debug)]
pub struct Workshop {
    config: ShopConfig,
    store:  EntityStore,
    routes: RoutingIndex,
}

impl Default for Workshop {
    fn default() -> Self {
        let config = ShopConfig::default();
        Self {
            routes: RoutingIndex::new(config.table_size),
            store:  EntityStore::new(),
            config,
        }
    }
}

impl Workshop {
    /// Create an empty workshop.  Fails if `config` is invalid.
    pub fn new(config: ShopConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self {
            routes: RoutingIndex::new(config.table_size),
            store:  EntityStore::new(),
            config,
        })
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn routes(&self) -> &RoutingIndex {
        &self.routes
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    pub fn add_job(&mut self, id: JobId) -> PlanResult<()> {
        Ok(self.store.add_job(id)?)
    }

    pub fn add_machine(&mut self, id: MachineId) -> PlanResult<()> {
        Ok(self.store.add_machine(id)?)
    }

    pub fn add_operation(&mut self, id: OperationId, job: JobId, position: u32) -> PlanResult<()> {
        Ok(self.store.add_operation(id, job, position)?)
    }

    /// Append `op` to the end of `job`, returning the position it received.
    pub fn append_operation(&mut self, id: OperationId, job: JobId) -> PlanResult<u32> {
        let position = self
            .store
            .next_position(job)
            .ok_or(ShopError::JobNotFound(job))?;
        self.store.add_operation(id, job, position)?;
        Ok(position)
    }

    /// Register a routing alternative.  Both endpoints must already exist.
    pub fn add_route(&mut self, route: Route) -> PlanResult<()> {
        if !self.store.contains_operation(route.operation) {
            return Err(ShopError::OperationNotFound(route.operation).into());
        }
        if !self.store.contains_machine(route.machine) {
            return Err(ShopError::MachineNotFound(route.machine).into());
        }
        Ok(self.routes.insert(route)?)
    }

    pub fn update_route_duration(
        &mut self,
        operation: OperationId,
        machine:   MachineId,
        duration:  u32,
    ) -> PlanResult<u32> {
        Ok(self.routes.update_duration(operation, machine, duration)?)
    }

    pub fn remove_route(&mut self, operation: OperationId, machine: MachineId) -> PlanResult<Route> {
        Ok(self.routes.remove(operation, machine)?)
    }

    // ── Cascading removal ─────────────────────────────────────────────────

    /// Remove `job`, its operations, and every route of those operations.
    ///
    /// Operations are drained one at a time and each one's routes are
    /// deleted before the next is taken.  Returns the removed operation ids.
    pub fn remove_job(&mut self, job: JobId) -> PlanResult<Vec<OperationId>> {
        if !self.store.contains_job(job) {
            return Err(ShopError::JobNotFound(job).into());
        }
        let mut removed = Vec::new();
        while let Some(op) = self.store.pop_operation_of_job(job) {
            self.routes.delete_by_operation(op);
            removed.push(op);
        }
        self.store.remove_job(job)?;
        debug!(job = job.0, operations = removed.len(), "job removed");
        Ok(removed)
    }

    /// Remove one operation and its routes.  Later operations of the job
    /// move up one position.
    pub fn remove_operation(&mut self, id: OperationId) -> PlanResult<Operation> {
        let op = self.store.remove_operation(id)?;
        self.routes.delete_by_operation(id);
        Ok(op)
    }

    /// Remove a machine and every route running on it.  Returns the number of
    /// routes dropped.
    pub fn remove_machine(&mut self, id: MachineId) -> PlanResult<usize> {
        self.store.remove_machine(id)?;
        Ok(self.routes.delete_by_machine(id))
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.routes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty() && self.routes.is_empty()
    }
}
