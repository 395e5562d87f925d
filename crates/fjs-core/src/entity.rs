//! Entity records and the `EntityStore` that owns them.
//!
//! # Layout
//!
//! Records live in `FxHashMap`s keyed by id.  Where output order matters the
//! store keeps an explicit ordered index beside the map:
//!
//! ```text
//! jobs        : FxHashMap<JobId, Job>          + job_order:     BTreeSet<JobId>
//! machines    : FxHashMap<MachineId, Machine>  + machine_order: BTreeSet<MachineId>
//! operations  : FxHashMap<OperationId, Operation>
//! sequences   : FxHashMap<JobId, Vec<OperationId>>   // index = position - 1
//! ```
//!
//! `sequences` is the single source of truth for positions: an operation's
//! `position` field always equals its index in its job's sequence plus one,
//! which makes the `1..k` contiguity invariant structural.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::{JobId, MachineId, OperationId, ShopError, ShopResult};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub id: JobId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Machine {
    pub id: MachineId,
}

/// One step of a job.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub id:       OperationId,
    pub job:      JobId,
    /// 1-based index within the job.
    pub position: u32,
}

// ── EntityStore ───────────────────────────────────────────────────────────────

/// Owns every job, machine, and operation record.
///
/// All mutating methods either succeed completely or return an error without
/// touching the store.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    jobs:          FxHashMap<JobId, Job>,
    job_order:     BTreeSet<JobId>,
    machines:      FxHashMap<MachineId, Machine>,
    machine_order: BTreeSet<MachineId>,
    operations:    FxHashMap<OperationId, Operation>,
    sequences:     FxHashMap<JobId, Vec<OperationId>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Jobs ──────────────────────────────────────────────────────────────

    pub fn add_job(&mut self, id: JobId) -> ShopResult<()> {
        if self.jobs.contains_key(&id) {
            return Err(ShopError::DuplicateJob(id));
        }
        self.jobs.insert(id, Job { id });
        self.job_order.insert(id);
        self.sequences.insert(id, Vec::new());
        Ok(())
    }

    /// Remove a job and every operation belonging to it.
    ///
    /// Returns the removed operation ids, highest position first, so the
    /// caller can cascade the deletion into the routing index.
    pub fn remove_job(&mut self, id: JobId) -> ShopResult<Vec<OperationId>> {
        if !self.jobs.contains_key(&id) {
            return Err(ShopError::JobNotFound(id));
        }
        let removed = self.remove_operations_by_job(id);
        self.jobs.remove(&id);
        self.job_order.remove(&id);
        self.sequences.remove(&id);
        Ok(removed)
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    pub fn contains_job(&self, id: JobId) -> bool {
        self.jobs.contains_key(&id)
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// All jobs, ascending by id.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.job_order.iter().map(move |id| &self.jobs[id])
    }

    // ── Machines ──────────────────────────────────────────────────────────

    pub fn add_machine(&mut self, id: MachineId) -> ShopResult<()> {
        if self.machines.contains_key(&id) {
            return Err(ShopError::DuplicateMachine(id));
        }
        self.machines.insert(id, Machine { id });
        self.machine_order.insert(id);
        Ok(())
    }

    pub fn remove_machine(&mut self, id: MachineId) -> ShopResult<Machine> {
        let machine = self.machines.remove(&id).ok_or(ShopError::MachineNotFound(id))?;
        self.machine_order.remove(&id);
        Ok(machine)
    }

    pub fn machine(&self, id: MachineId) -> Option<&Machine> {
        self.machines.get(&id)
    }

    pub fn contains_machine(&self, id: MachineId) -> bool {
        self.machines.contains_key(&id)
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// All machines, ascending by id.
    pub fn machines(&self) -> impl Iterator<Item = &Machine> + '_ {
        self.machine_order.iter().map(move |id| &self.machines[id])
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Append operation `id` to `job` at `position`.
    ///
    /// `position` must be exactly one past the job's current last position
    /// (1 for a job with no operations yet).
    pub fn add_operation(&mut self, id: OperationId, job: JobId, position: u32) -> ShopResult<()> {
        if self.operations.contains_key(&id) {
            return Err(ShopError::DuplicateOperation(id));
        }
        let sequence = self.sequences.get_mut(&job).ok_or(ShopError::JobNotFound(job))?;
        let expected = sequence.len() as u32 + 1;
        if position != expected {
            return Err(ShopError::NonContiguousPosition { job, expected, got: position });
        }
        sequence.push(id);
        self.operations.insert(id, Operation { id, job, position });
        Ok(())
    }

    /// Remove one operation.  Later operations of the same job shift down by
    /// one position so the job's positions remain `1..k`.
    pub fn remove_operation(&mut self, id: OperationId) -> ShopResult<Operation> {
        let op = self.operations.remove(&id).ok_or(ShopError::OperationNotFound(id))?;
        if let Some(sequence) = self.sequences.get_mut(&op.job) {
            let idx = (op.position - 1) as usize;
            sequence.remove(idx);
            for (i, later) in sequence.iter().enumerate().skip(idx) {
                if let Some(o) = self.operations.get_mut(later) {
                    o.position = i as u32 + 1;
                }
            }
        }
        Ok(op)
    }

    /// Remove the highest-position operation of `job` and return its id.
    ///
    /// Returns `None` once the job has no operations left (or does not
    /// exist).  Calling this in a loop is the step-wise form of
    /// [`remove_operations_by_job`](Self::remove_operations_by_job).
    pub fn pop_operation_of_job(&mut self, job: JobId) -> Option<OperationId> {
        let id = self.sequences.get_mut(&job)?.pop()?;
        self.operations.remove(&id);
        Some(id)
    }

    /// Remove every operation of `job`, returning each removed id.
    pub fn remove_operations_by_job(&mut self, job: JobId) -> Vec<OperationId> {
        let mut removed = Vec::new();
        while let Some(id) = self.pop_operation_of_job(job) {
            removed.push(id);
        }
        removed
    }

    pub fn operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(&id)
    }

    pub fn contains_operation(&self, id: OperationId) -> bool {
        self.operations.contains_key(&id)
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Operation ids of `job` in position order.  Empty for unknown jobs.
    pub fn operations_of_job(&self, job: JobId) -> &[OperationId] {
        self.sequences.get(&job).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All operations ordered by `(job, position)`.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> + '_ {
        self.job_order
            .iter()
            .flat_map(move |job| self.operations_of_job(*job))
            .map(move |id| &self.operations[id])
    }

    /// Next free position for `job`, or `None` if the job does not exist.
    pub fn next_position(&self, job: JobId) -> Option<u32> {
        self.sequences.get(&job).map(|s| s.len() as u32 + 1)
    }

    // ── Bulk ──────────────────────────────────────────────────────────────

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.machines.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.jobs.clear();
        self.job_order.clear();
        self.machines.clear();
        self.machine_order.clear();
        self.operations.clear();
        self.sequences.clear();
    }
}
