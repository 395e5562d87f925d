//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Identifiers are 1-based: `0` is
//! never handed out by the seed data or the importers, and machine row
//! lookups in the plan grid treat it as out of range.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identifier of a job (an ordered chain of operations).
    pub struct JobId(u32);
}

typed_id! {
    /// Identifier of an operation.  Unique across all jobs.
    pub struct OperationId(u32);
}

typed_id! {
    /// Identifier of a machine.  Also the routing-index hash key and, minus
    /// one, the plan-grid row.
    pub struct MachineId(u32);
}

impl MachineId {
    /// Zero-based plan-grid row for this machine, or `None` for id 0.
    #[inline]
    pub fn row(self) -> Option<usize> {
        self.0.checked_sub(1).map(|r| r as usize)
    }
}
