//! Tests for fjs-io.

use std::collections::BTreeSet;

use fjs_core::{JobId, MachineId, OperationId};
use fjs_plan::Workshop;
use fjs_routing::Route;

use crate::{JobRow, OperationRow, RouteRow, ShopData};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_shop() -> Workshop {
    let mut w = Workshop::default();
    for m in 1..=3 {
        w.add_machine(MachineId(m)).unwrap();
    }
    for (job, ops) in [(1, vec![1, 2]), (2, vec![3]), (3, vec![4, 5, 6])] {
        w.add_job(JobId(job)).unwrap();
        for op in ops {
            w.append_operation(OperationId(op), JobId(job)).unwrap();
        }
    }
    for (op, m, d) in [(1, 1, 4), (1, 3, 5), (2, 2, 3), (3, 1, 2), (4, 2, 6), (5, 3, 1), (6, 1, 2)] {
        w.add_route(Route::new(OperationId(op), MachineId(m), d)).unwrap();
    }
    w
}

fn as_sets(d: &ShopData) -> (BTreeSet<u32>, BTreeSet<u32>, BTreeSet<OperationRow>, BTreeSet<RouteRow>) {
    (
        d.jobs.iter().map(|j| j.id).collect(),
        d.machines.iter().map(|m| m.id).collect(),
        d.operations.iter().copied().collect(),
        d.routes.iter().copied().collect(),
    )
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec()).unwrap().lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text::{read_records, to_bytes};
    use crate::{IoError, ReadOutcome};

    #[test]
    fn header_written_even_when_empty() {
        let bytes = to_bytes::<JobRow>(&[]).unwrap();
        assert_eq!(lines(&bytes), vec!["ID"]);
    }

    #[test]
    fn routes_use_semicolons() {
        let rows = [RouteRow { operation_id: 1, machine_id: 3, duration: 5 }];
        let bytes = to_bytes(&rows).unwrap();
        assert_eq!(lines(&bytes), vec!["OperationID;MachineID;Duration", "1;3;5"]);
    }

    #[test]
    fn malformed_lines_skipped() {
        let input = "ID;JobID;Position\n1;1;1\n2;1\n3;x;2\n4;2;1;9\n5;2;1\n";
        let out: ReadOutcome<OperationRow> = read_records(input.as_bytes()).unwrap();
        let ids: Vec<u32> = out.rows.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(out.skipped, 3);
    }

    #[test]
    fn fields_are_trimmed() {
        let input = "OperationID;MachineID;Duration\n 2 ; 4 ; 7 \n";
        let out: ReadOutcome<RouteRow> = read_records(input.as_bytes()).unwrap();
        assert_eq!(out.rows, vec![RouteRow { operation_id: 2, machine_id: 4, duration: 7 }]);
    }

    #[test]
    fn wrong_header_rejected() {
        let input = "OperationID;MachineID;Duration\n1;1;4\n";
        let err = read_records::<_, OperationRow>(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::Header { .. }));
        assert_eq!(err.kind(), fjs_core::ErrorKind::MalformedInput);
    }

    #[test]
    fn empty_stream_reads_nothing() {
        let out: ReadOutcome<JobRow> = read_records("".as_bytes()).unwrap();
        assert!(out.rows.is_empty());
        assert_eq!(out.skipped, 0);
    }
}

#[cfg(test)]
mod binary_tests {
    use super::*;
    use crate::binary::{from_bytes, to_bytes};
    use crate::{IoError, Record};

    #[test]
    fn records_are_fixed_size() {
        let rows = [RouteRow { operation_id: 1, machine_id: 2, duration: 3 }; 4];
        let bytes = to_bytes(&rows).unwrap();
        assert_eq!(RouteRow::record_size(), 12);
        assert_eq!(bytes.len(), 4 * 12);
        // Little-endian u32 fields, no header.
        assert_eq!(&bytes[..12], &[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
        assert_eq!(from_bytes::<RouteRow>(&bytes).unwrap(), rows.to_vec());
    }

    #[test]
    fn truncated_stream_rejected() {
        let mut bytes = to_bytes(&[JobRow { id: 1 }, JobRow { id: 2 }]).unwrap();
        bytes.pop();
        let err = from_bytes::<JobRow>(&bytes).unwrap_err();
        assert!(matches!(err, IoError::Truncated { len: 7, record_size: 4 }));
    }
}

#[cfg(test)]
mod shop_data {
    use tempfile::TempDir;

    use super::*;
    use crate::{Format, read_schedule, write_schedule};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn text_round_trip_preserves_record_set() {
        let dir = tmp();
        let original = ShopData::from_workshop(&sample_shop());
        original.save(dir.path(), Format::Text).unwrap();

        for name in ["jobs.csv", "machines.csv", "operations.csv", "routes.csv"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }

        let mut reloaded = Workshop::default();
        let report = ShopData::import_into(dir.path(), Format::Text, &mut reloaded).unwrap();
        assert_eq!(report.rejected, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.routes, 7);
        assert_eq!(as_sets(&ShopData::from_workshop(&reloaded)), as_sets(&original));
    }

    #[test]
    fn binary_round_trip_preserves_record_set() {
        let dir = tmp();
        let original = ShopData::from_workshop(&sample_shop());
        original.save(dir.path(), Format::Binary).unwrap();

        let (loaded, skipped) = ShopData::load(dir.path(), Format::Binary).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(as_sets(&loaded), as_sets(&original));
        assert_eq!(std::fs::metadata(dir.path().join("operations.bin")).unwrap().len(), 6 * 12);
    }

    #[test]
    fn apply_sorts_operations_and_rejects_dangling_rows() {
        let data = ShopData {
            jobs:       vec![JobRow { id: 1 }, JobRow { id: 1 }],
            machines:   vec![crate::MachineRow { id: 1 }],
            operations: vec![
                OperationRow { id: 11, job_id: 1, position: 2 },
                OperationRow { id: 10, job_id: 1, position: 1 },
                OperationRow { id: 12, job_id: 1, position: 4 },
            ],
            routes:     vec![
                RouteRow { operation_id: 10, machine_id: 1, duration: 3 },
                RouteRow { operation_id: 10, machine_id: 2, duration: 3 },
            ],
        };
        let mut shop = Workshop::default();
        let report = data.apply(&mut shop);
        assert_eq!(report.jobs, 1);
        assert_eq!(report.operations, 2);
        assert_eq!(report.routes, 1);
        // Duplicate job, position gap, unknown machine.
        assert_eq!(report.rejected, 3);
        assert_eq!(shop.store().operations_of_job(JobId(1)), &[OperationId(10), OperationId(11)]);
    }

    #[test]
    fn failed_load_leaves_workshop_untouched() {
        let dir = tmp();
        ShopData::from_workshop(&sample_shop()).save(dir.path(), Format::Text).unwrap();
        std::fs::remove_file(dir.path().join("routes.csv")).unwrap();

        let mut shop = Workshop::default();
        let err = ShopData::import_into(dir.path(), Format::Text, &mut shop).unwrap_err();
        assert_eq!(err.kind(), fjs_core::ErrorKind::Io);
        assert!(shop.is_empty());
    }

    #[test]
    fn schedule_export_round_trip() {
        let dir = tmp();
        let run = fjs_plan::Scheduler::new(fjs_core::ShopConfig::default())
            .run(&sample_shop())
            .unwrap();
        assert!(run.is_complete());

        let path = dir.path().join("schedule.csv");
        write_schedule(&path, &run.records, Format::Text).unwrap();
        let text = std::fs::read(&path).unwrap();
        assert_eq!(lines(&text)[0], "MachineID;JobID;OperationID;StartTime;EndTime");

        let rows = read_schedule(&path, Format::Text).unwrap();
        assert_eq!(rows, crate::schedule_rows(&run.records));

        let bin = dir.path().join("schedule.bin");
        write_schedule(&bin, &run.records, Format::Binary).unwrap();
        assert_eq!(read_schedule(&bin, Format::Binary).unwrap(), rows);
    }
}
