//! `ShopData`: the full set of persisted collections, and the bridge between
//! files and a [`Workshop`].
//!
//! # Directory layout
//!
//! | Format   | Files                                                         |
//! |----------|---------------------------------------------------------------|
//! | `Text`   | `jobs.csv`, `machines.csv`, `operations.csv`, `routes.csv`    |
//! | `Binary` | `jobs.bin`, `machines.bin`, `operations.bin`, `routes.bin`    |
//!
//! Saves serialize all four collections in memory before the first file is
//! written; loads decode all four files before anything is returned.  A
//! failure therefore never leaves a half-updated `Workshop` behind.

use std::fs;
use std::path::Path;

use fjs_core::{JobId, MachineId, OperationId};
use fjs_plan::Workshop;
use fjs_routing::Route;
use tracing::{info, warn};

use crate::row::{JobRow, MachineRow, OperationRow, Record, RouteRow};
use crate::{IoResult, binary, text};

/// On-disk representation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Binary,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "csv",
            Format::Binary => "bin",
        }
    }

    pub fn file_name<T: Record>(self) -> String {
        format!("{}.{}", T::STEM, self.extension())
    }
}

// ── ShopData ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopData {
    pub jobs:       Vec<JobRow>,
    pub machines:   Vec<MachineRow>,
    pub operations: Vec<OperationRow>,
    pub routes:     Vec<RouteRow>,
}

/// Counts from [`ShopData::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub jobs:       usize,
    pub machines:   usize,
    pub operations: usize,
    pub routes:     usize,
    /// Records the workshop refused (duplicates, gaps, dangling references).
    pub rejected:   usize,
    /// Text lines skipped as malformed while reading.
    pub skipped:    usize,
}

impl ShopData {
    /// Snapshot every record of `shop` in deterministic order.
    pub fn from_workshop(shop: &Workshop) -> Self {
        let store = shop.store();
        Self {
            jobs:       store.jobs().map(JobRow::from).collect(),
            machines:   store.machines().map(MachineRow::from).collect(),
            operations: store.operations().map(OperationRow::from).collect(),
            routes:     shop.routes().iter().map(RouteRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
            && self.machines.is_empty()
            && self.operations.is_empty()
            && self.routes.is_empty()
    }

    /// Insert every record into `shop`.
    ///
    /// Operations are inserted sorted by `(job, position)` so files listing
    /// them in any order load cleanly.  Records the workshop rejects are
    /// counted and logged; they do not stop the import.
    pub fn apply(&self, shop: &mut Workshop) -> ImportReport {
        let mut report = ImportReport::default();

        for row in &self.jobs {
            match shop.add_job(JobId(row.id)) {
                Ok(()) => report.jobs += 1,
                Err(error) => reject(&mut report, "job", &error),
            }
        }
        for row in &self.machines {
            match shop.add_machine(MachineId(row.id)) {
                Ok(()) => report.machines += 1,
                Err(error) => reject(&mut report, "machine", &error),
            }
        }

        let mut operations = self.operations.clone();
        operations.sort_by_key(|o| (o.job_id, o.position));
        for row in &operations {
            match shop.add_operation(OperationId(row.id), JobId(row.job_id), row.position) {
                Ok(()) => report.operations += 1,
                Err(error) => reject(&mut report, "operation", &error),
            }
        }

        for row in &self.routes {
            let route = Route::new(OperationId(row.operation_id), MachineId(row.machine_id), row.duration);
            match shop.add_route(route) {
                Ok(()) => report.routes += 1,
                Err(error) => reject(&mut report, "route", &error),
            }
        }

        info!(
            jobs = report.jobs,
            machines = report.machines,
            operations = report.operations,
            routes = report.routes,
            rejected = report.rejected,
            "shop data applied"
        );
        report
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Write all four collections into `dir` (created if missing).
    pub fn save(&self, dir: &Path, format: Format) -> IoResult<()> {
        let files = [
            (format.file_name::<JobRow>(), encode(&self.jobs, format)?),
            (format.file_name::<MachineRow>(), encode(&self.machines, format)?),
            (format.file_name::<OperationRow>(), encode(&self.operations, format)?),
            (format.file_name::<RouteRow>(), encode(&self.routes, format)?),
        ];
        fs::create_dir_all(dir)?;
        for (name, bytes) in files {
            fs::write(dir.join(name), bytes)?;
        }
        Ok(())
    }

    /// Read all four collections from `dir`.  Returns the data and the
    /// number of malformed text lines skipped.
    pub fn load(dir: &Path, format: Format) -> IoResult<(Self, usize)> {
        let mut skipped = 0;
        let data = Self {
            jobs:       decode(dir, format, &mut skipped)?,
            machines:   decode(dir, format, &mut skipped)?,
            operations: decode(dir, format, &mut skipped)?,
            routes:     decode(dir, format, &mut skipped)?,
        };
        Ok((data, skipped))
    }

    /// [`load`](Self::load) then [`apply`](Self::apply).
    pub fn import_into(dir: &Path, format: Format, shop: &mut Workshop) -> IoResult<ImportReport> {
        let (data, skipped) = Self::load(dir, format)?;
        let mut report = data.apply(shop);
        report.skipped = skipped;
        Ok(report)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reject(report: &mut ImportReport, what: &str, error: &dyn std::fmt::Display) {
    warn!(record = what, %error, "record rejected");
    report.rejected += 1;
}

fn encode<T: Record>(rows: &[T], format: Format) -> IoResult<Vec<u8>> {
    match format {
        Format::Text => text::to_bytes(rows),
        Format::Binary => binary::to_bytes(rows),
    }
}

fn decode<T: Record>(dir: &Path, format: Format, skipped: &mut usize) -> IoResult<Vec<T>> {
    let bytes = fs::read(dir.join(format.file_name::<T>()))?;
    match format {
        Format::Text => {
            let outcome = text::read_records::<_, T>(bytes.as_slice())?;
            *skipped += outcome.skipped;
            Ok(outcome.rows)
        }
        Format::Binary => binary::from_bytes(&bytes),
    }
}
