//! `fjs-routing`: the routing index: which machines can run each operation,
//! and for how long.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`route`]  | `Route` (operation × machine × duration)            |
//! | [`index`]  | `RoutingIndex`, `Bucket`                            |
//! | [`error`]  | `RoutingError`, `RoutingResult<T>`                  |
//!
//! # Hash key
//!
//! Every index operation hashes on the **machine** id:
//!
//! ```text
//! bucket(machine) = (machine - 1) mod table_size
//! ```
//!
//! Lookups by `(operation, machine)` therefore touch a single bucket, while
//! anything keyed on the operation alone (selection, cascading delete) scans
//! every bucket.  With a table of 13 buckets that scan is trivially cheap.

pub mod error;
pub mod index;
pub mod route;


pub use error::{RoutingError, RoutingResult};
pub use index::{Bucket, RoutingIndex};
pub use route::Route;
