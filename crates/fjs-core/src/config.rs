//! Shop configuration.
//!
//! # Design
//!
//! Time is a dimensionless integer unit.  Every interval in the scheduler is
//! expressed as `(start, duration)` and covers the half-open range
//! `[start, start + duration)`; the end stored in a plan-grid cell is the
//! absolute `start + duration`.
//!
//! The grid is deliberately small (8 machines × 35 time units by default) so
//! the per-call full-row and full-grid scans used by placement stay cheap.

use crate::{ShopError, ShopResult};

/// Default number of routing-index buckets.
pub const DEFAULT_TABLE_SIZE: usize = 13;
/// Default number of plan-grid rows (machines).
pub const DEFAULT_MACHINE_COUNT: u32 = 8;
/// Default number of plan-grid columns (time units).
pub const DEFAULT_HORIZON: u32 = 35;

// ── Objective ─────────────────────────────────────────────────────────────────

/// Which route duration the selector prefers for each operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Objective {
    /// Shortest duration wins.
    #[default]
    Minimize,
    /// Longest duration wins.
    Maximize,
}

impl Objective {
    /// `true` if `candidate` should replace `best` under this objective.
    /// Ties keep `best`, so the first route encountered wins.
    #[inline]
    pub fn prefers(self, candidate: u32, best: u32) -> bool {
        match self {
            Objective::Minimize => candidate < best,
            Objective::Maximize => candidate > best,
        }
    }
}

// ── PlacementPolicy ───────────────────────────────────────────────────────────

/// How `fill_all` chooses a start time for each work-plan entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacementPolicy {
    /// Search forward from the job's last end for the first open interval on
    /// the machine, filling earlier gaps.  Fails only past the horizon.
    #[default]
    Retry,
    /// One attempt at the later of the machine's last end and the job's last
    /// end; the entry is dropped if that interval does not fit.
    Skip,
}

// ── ShopConfig ────────────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
///
/// Typically loaded from a TOML file by the application crate; every field
/// has a default so partial files are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShopConfig {
    /// Bucket count of the routing index.
    pub table_size: usize,

    /// Plan-grid rows.  Machine `m` occupies row `m - 1`.
    pub machine_count: u32,

    /// Plan-grid columns, i.e. the latest end time any operation may have.
    pub horizon: u32,

    pub objective: Objective,

    pub placement: PlacementPolicy,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            table_size:    DEFAULT_TABLE_SIZE,
            machine_count: DEFAULT_MACHINE_COUNT,
            horizon:       DEFAULT_HORIZON,
            objective:     Objective::default(),
            placement:     PlacementPolicy::default(),
        }
    }
}

impl ShopConfig {
    /// Reject configurations that would produce an empty index or grid.
    pub fn validate(&self) -> ShopResult<()> {
        if self.table_size == 0 {
            return Err(ShopError::Config("table_size must be > 0".into()));
        }
        if self.machine_count == 0 {
            return Err(ShopError::Config("machine_count must be > 0".into()));
        }
        if self.horizon == 0 {
            return Err(ShopError::Config("horizon must be > 0".into()));
        }
        Ok(())
    }

    /// Total number of plan-grid cells.
    #[inline]
    pub fn grid_cells(&self) -> usize {
        self.machine_count as usize * self.horizon as usize
    }
}
