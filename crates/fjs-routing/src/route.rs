use fjs_core::{MachineId, OperationId};

/// A candidate way of executing an operation: on `machine`, taking
/// `duration` time units.
///
/// At most one route exists per `(operation, machine)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub operation: OperationId,
    pub machine:   MachineId,
    pub duration:  u32,
}

impl Route {
    pub fn new(operation: OperationId, machine: MachineId, duration: u32) -> Self {
        Self { operation, machine, duration }
    }

    #[inline]
    pub fn matches(&self, operation: OperationId, machine: MachineId) -> bool {
        self.operation == operation && self.machine == machine
    }
}
