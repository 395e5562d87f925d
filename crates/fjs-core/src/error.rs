//! Shop-level error type and the shared error taxonomy.
//!
//! Sub-crates define their own error enums (`RoutingError`, `PlanError`,
//! `IoError`) and map each variant onto [`ErrorKind`] so callers can decide
//! whether to retry, skip, or report without matching every variant.

use thiserror::Error;

use crate::{JobId, MachineId, OperationId};

/// Coarse classification shared by every `fjs-*` error.
///
/// All kinds are recoverable at the call site; none of them leave the
/// in-memory structures partially mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Insert rejected because the key already exists.
    DuplicateKey,
    /// Update, delete, or lookup on an absent id.
    NotFound,
    /// The request would break a structural invariant (position gaps,
    /// overlapping intervals, zero durations, out-of-range coordinates).
    StructuralViolation,
    /// An allocation could not be satisfied.
    ResourceExhaustion,
    /// Input that could not be parsed.
    MalformedInput,
    /// The persistence layer could not read or write.
    Io,
}

/// Errors raised by the [`EntityStore`](crate::EntityStore) and config layer.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("job {0} already exists")]
    DuplicateJob(JobId),

    #[error("operation {0} already exists")]
    DuplicateOperation(OperationId),

    #[error("machine {0} already exists")]
    DuplicateMachine(MachineId),

    #[error("job {0} not found")]
    JobNotFound(JobId),

    #[error("operation {0} not found")]
    OperationNotFound(OperationId),

    #[error("machine {0} not found")]
    MachineNotFound(MachineId),

    #[error("operation position {got} does not extend job {job}: expected {expected}")]
    NonContiguousPosition {
        job:      JobId,
        expected: u32,
        got:      u32,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ShopError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::DuplicateJob(_)
            | ShopError::DuplicateOperation(_)
            | ShopError::DuplicateMachine(_) => ErrorKind::DuplicateKey,
            ShopError::JobNotFound(_)
            | ShopError::OperationNotFound(_)
            | ShopError::MachineNotFound(_) => ErrorKind::NotFound,
            ShopError::NonContiguousPosition { .. } => ErrorKind::StructuralViolation,
            ShopError::Config(_) => ErrorKind::MalformedInput,
        }
    }
}

/// Shorthand result type for `fjs-core`.
pub type ShopResult<T> = Result<T, ShopError>;
