//! `fjs-core`: foundational types for the flexible job-shop scheduler.
//!
//! This crate is a dependency of every other `fjs-*` crate.  It has no
//! `fjs-*` dependencies and minimal external ones (`rustc-hash` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `JobId`, `OperationId`, `MachineId`                   |
//! | [`entity`]      | `Job`, `Machine`, `Operation`, `EntityStore`          |
//! | [`config`]      | `ShopConfig`, `Objective`, `PlacementPolicy`          |
//! | [`error`]       | `ShopError`, `ShopResult`, `ErrorKind`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, records and config. |

pub mod config;
pub mod entity;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Objective, PlacementPolicy, ShopConfig};
pub use entity::{EntityStore, Job, Machine, Operation};
pub use error::{ErrorKind, ShopError, ShopResult};
pub use ids::{JobId, MachineId, OperationId};
