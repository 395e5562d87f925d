use fjs_core::{ErrorKind, MachineId, OperationId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("route for {operation} on {machine} already exists")]
    DuplicateRoute {
        operation: OperationId,
        machine:   MachineId,
    },

    #[error("no route for {operation} on {machine}")]
    RouteNotFound {
        operation: OperationId,
        machine:   MachineId,
    },

    #[error("route for {operation} on {machine} has zero duration")]
    ZeroDuration {
        operation: OperationId,
        machine:   MachineId,
    },
}

impl RoutingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoutingError::DuplicateRoute { .. } => ErrorKind::DuplicateKey,
            RoutingError::RouteNotFound { .. } => ErrorKind::NotFound,
            RoutingError::ZeroDuration { .. } => ErrorKind::StructuralViolation,
        }
    }
}

pub type RoutingResult<T> = Result<T, RoutingError>;
