use fjs_core::{ErrorKind, JobId, MachineId, OperationId, ShopError};
use fjs_routing::RoutingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("job {job}: operation {operation} has no routes")]
    NoRoutes {
        job:       JobId,
        operation: OperationId,
    },

    #[error("machine {machine} is outside the plan grid ({machine_count} machines)")]
    MachineOutOfRange {
        machine:       MachineId,
        machine_count: u32,
    },

    #[error("interval [{start}, {start}+{duration}) exceeds horizon {horizon}")]
    OutOfHorizon {
        start:    u32,
        duration: u32,
        horizon:  u32,
    },

    #[error("interval [{start}, {start}+{duration}) on {machine} is already occupied")]
    Overlap {
        machine:  MachineId,
        start:    u32,
        duration: u32,
    },

    #[error("zero-length interval for operation {operation}")]
    EmptyInterval { operation: OperationId },

    #[error("job {job}: operation {operation} skipped because an earlier operation was not placed")]
    PredecessorUnplaced {
        job:       JobId,
        operation: OperationId,
    },

    #[error("cannot allocate a plan grid of {cells} cells")]
    Allocation { cells: usize },
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::Shop(e) => e.kind(),
            PlanError::Routing(e) => e.kind(),
            PlanError::NoRoutes { .. } => ErrorKind::NotFound,
            PlanError::MachineOutOfRange { .. }
            | PlanError::OutOfHorizon { .. }
            | PlanError::Overlap { .. }
            | PlanError::EmptyInterval { .. }
            | PlanError::PredecessorUnplaced { .. } => ErrorKind::StructuralViolation,
            PlanError::Allocation { .. } => ErrorKind::ResourceExhaustion,
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
