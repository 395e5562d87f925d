//! Unit tests for fjs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{JobId, MachineId, OperationId};

    #[test]
    fn ordering() {
        assert!(JobId(0) < JobId(1));
        assert!(OperationId(100) > OperationId(99));
    }

    #[test]
    fn machine_row_is_zero_based() {
        assert_eq!(MachineId(1).row(), Some(0));
        assert_eq!(MachineId(8).row(), Some(7));
        assert_eq!(MachineId(0).row(), None);
    }

    #[test]
    fn display() {
        assert_eq!(JobId(7).to_string(), "JobId(7)");
        assert_eq!(MachineId(3).to_string(), "MachineId(3)");
    }
}

#[cfg(test)]
mod config {
    use crate::{ErrorKind, Objective, ShopConfig};

    #[test]
    fn defaults_match_observed_shop() {
        let c = ShopConfig::default();
        assert_eq!(c.table_size, 13);
        assert_eq!(c.machine_count, 8);
        assert_eq!(c.horizon, 35);
        assert_eq!(c.grid_cells(), 8 * 35);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_sizes_rejected() {
        let c = ShopConfig { horizon: 0, ..ShopConfig::default() };
        let err = c.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let c = ShopConfig { table_size: 0, ..ShopConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn objective_ties_keep_first() {
        assert!(Objective::Minimize.prefers(3, 4));
        assert!(!Objective::Minimize.prefers(4, 4));
        assert!(Objective::Maximize.prefers(5, 4));
        assert!(!Objective::Maximize.prefers(4, 4));
    }
}

#[cfg(test)]
mod entity_store {
    use crate::{EntityStore, ErrorKind, JobId, MachineId, OperationId, ShopError};

    /// Job 1 with operations 1..=3, job 2 with operations 4..=5.
    fn two_jobs() -> EntityStore {
        let mut s = EntityStore::new();
        s.add_job(JobId(1)).unwrap();
        s.add_job(JobId(2)).unwrap();
        for (op, pos) in [(1, 1), (2, 2), (3, 3)] {
            s.add_operation(OperationId(op), JobId(1), pos).unwrap();
        }
        for (op, pos) in [(4, 1), (5, 2)] {
            s.add_operation(OperationId(op), JobId(2), pos).unwrap();
        }
        s
    }

    fn positions(s: &EntityStore, job: JobId) -> Vec<u32> {
        s.operations_of_job(job)
            .iter()
            .map(|id| s.operation(*id).unwrap().position)
            .collect()
    }

    #[test]
    fn duplicate_job_rejected() {
        let mut s = two_jobs();
        let err = s.add_job(JobId(1)).unwrap_err();
        assert!(matches!(err, ShopError::DuplicateJob(JobId(1))));
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(s.job_count(), 2);
    }

    #[test]
    fn duplicate_operation_rejected_without_mutation() {
        let mut s = two_jobs();
        assert!(s.add_operation(OperationId(1), JobId(2), 3).is_err());
        assert_eq!(s.operations_of_job(JobId(2)).len(), 2);
        assert_eq!(s.operation(OperationId(1)).unwrap().job, JobId(1));
    }

    #[test]
    fn non_contiguous_position_rejected() {
        let mut s = two_jobs();
        let err = s.add_operation(OperationId(9), JobId(2), 4).unwrap_err();
        match err {
            ShopError::NonContiguousPosition { job, expected, got } => {
                assert_eq!(job, JobId(2));
                assert_eq!(expected, 3);
                assert_eq!(got, 4);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!s.contains_operation(OperationId(9)));
    }

    #[test]
    fn operation_for_unknown_job_rejected() {
        let mut s = two_jobs();
        let err = s.add_operation(OperationId(9), JobId(42), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn remove_middle_operation_renumbers() {
        let mut s = two_jobs();
        let removed = s.remove_operation(OperationId(2)).unwrap();
        assert_eq!(removed.position, 2);
        assert_eq!(s.operations_of_job(JobId(1)), &[OperationId(1), OperationId(3)]);
        assert_eq!(positions(&s, JobId(1)), vec![1, 2]);
        assert_eq!(s.next_position(JobId(1)), Some(3));
    }

    #[test]
    fn remove_missing_operation_fails() {
        let mut s = two_jobs();
        let err = s.remove_operation(OperationId(77)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(s.operation_count(), 5);
    }

    #[test]
    fn remove_operations_by_job_drains_until_empty() {
        let mut s = two_jobs();
        assert_eq!(s.pop_operation_of_job(JobId(1)), Some(OperationId(3)));
        let rest = s.remove_operations_by_job(JobId(1));
        assert_eq!(rest, vec![OperationId(2), OperationId(1)]);
        assert_eq!(s.pop_operation_of_job(JobId(1)), None);
        assert!(s.contains_job(JobId(1)));
        assert_eq!(s.operation_count(), 2);
    }

    #[test]
    fn remove_job_cascades() {
        let mut s = two_jobs();
        let removed = s.remove_job(JobId(2)).unwrap();
        assert_eq!(removed, vec![OperationId(5), OperationId(4)]);
        assert!(!s.contains_job(JobId(2)));
        assert!(s.operation(OperationId(4)).is_none());
        assert!(s.remove_job(JobId(2)).is_err());
    }

    #[test]
    fn operations_iterate_by_job_then_position() {
        let mut s = EntityStore::new();
        s.add_job(JobId(2)).unwrap();
        s.add_job(JobId(1)).unwrap();
        s.add_operation(OperationId(10), JobId(2), 1).unwrap();
        s.add_operation(OperationId(20), JobId(1), 1).unwrap();
        s.add_operation(OperationId(5), JobId(1), 2).unwrap();
        let ids: Vec<u32> = s.operations().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![20, 5, 10]);
        let jobs: Vec<u32> = s.jobs().map(|j| j.id.0).collect();
        assert_eq!(jobs, vec![1, 2]);
    }

    #[test]
    fn machines_add_remove() {
        let mut s = EntityStore::new();
        s.add_machine(MachineId(3)).unwrap();
        s.add_machine(MachineId(1)).unwrap();
        assert!(s.add_machine(MachineId(3)).is_err());
        let ids: Vec<u32> = s.machines().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        s.remove_machine(MachineId(1)).unwrap();
        assert!(s.remove_machine(MachineId(1)).is_err());
        assert_eq!(s.machine_count(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut s = two_jobs();
        s.add_machine(MachineId(1)).unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.operation_count(), 0);
    }
}

#[cfg(test)]
mod contiguity_property {
    use proptest::prelude::*;

    use crate::{EntityStore, JobId, OperationId};

    #[derive(Clone, Debug)]
    enum Step {
        Append(u32),
        Insert { job: u32, position: u32 },
        RemoveOp(u32),
        RemoveJob(u32),
        AddJob(u32),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            4 => (1..4u32).prop_map(Step::Append),
            1 => (1..4u32, 0..6u32).prop_map(|(job, position)| Step::Insert { job, position }),
            2 => (1..40u32).prop_map(Step::RemoveOp),
            1 => (1..4u32).prop_map(Step::RemoveJob),
            1 => (1..4u32).prop_map(Step::AddJob),
        ]
    }

    proptest! {
        #[test]
        fn positions_stay_contiguous(steps in proptest::collection::vec(step(), 1..60)) {
            let mut s = EntityStore::new();
            for j in 1..4 {
                s.add_job(JobId(j)).unwrap();
            }
            let mut next_op = 1u32;
            for st in steps {
                match st {
                    Step::Append(job) => {
                        if let Some(pos) = s.next_position(JobId(job)) {
                            s.add_operation(OperationId(next_op), JobId(job), pos).unwrap();
                            next_op += 1;
                        }
                    }
                    Step::Insert { job, position } => {
                        if s.add_operation(OperationId(next_op), JobId(job), position).is_ok() {
                            next_op += 1;
                        }
                    }
                    Step::RemoveOp(op) => { let _ = s.remove_operation(OperationId(op)); }
                    Step::RemoveJob(job) => { let _ = s.remove_job(JobId(job)); }
                    Step::AddJob(job) => { let _ = s.add_job(JobId(job)); }
                }

                for job in s.jobs() {
                    let ops = s.operations_of_job(job.id);
                    for (i, id) in ops.iter().enumerate() {
                        let op = s.operation(*id).unwrap();
                        prop_assert_eq!(op.position, i as u32 + 1);
                        prop_assert_eq!(op.job, job.id);
                    }
                }
            }
        }
    }
}
