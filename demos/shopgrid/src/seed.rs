//! Built-in sample shop: 4 jobs of 3 operations each on 6 machines.
//!
//! Shortest routes sum to 26 time units, so the minimizing plan always fits
//! the default 35-unit horizon.  The longest routes sum to 43, so the
//! maximizing plan only fits where placements overlap in time.

use anyhow::{Context, Result};
use fjs_io::text::read_records;
use fjs_io::{ImportReport, Record, ShopData};
use fjs_plan::Workshop;

const JOBS_CSV: &str = "\
ID\n\
1\n\
2\n\
3\n\
4\n\
";

const MACHINES_CSV: &str = "\
ID\n\
1\n\
2\n\
3\n\
4\n\
5\n\
6\n\
";

const OPERATIONS_CSV: &str = "\
ID;JobID;Position\n\
1;1;1\n\
2;1;2\n\
3;1;3\n\
4;2;1\n\
5;2;2\n\
6;2;3\n\
7;3;1\n\
8;3;2\n\
9;3;3\n\
10;4;1\n\
11;4;2\n\
12;4;3\n\
";

const ROUTES_CSV: &str = "\
OperationID;MachineID;Duration\n\
1;1;3\n\
1;2;5\n\
2;3;2\n\
2;4;4\n\
3;5;3\n\
4;1;2\n\
4;6;4\n\
5;2;3\n\
5;3;1\n\
6;4;2\n\
7;5;2\n\
7;1;6\n\
8;6;3\n\
9;2;2\n\
9;3;2\n\
10;3;3\n\
10;4;5\n\
11;1;1\n\
11;5;2\n\
12;6;2\n\
12;2;4\n\
";

fn parse<T: Record>(csv: &str) -> Result<Vec<T>> {
    let outcome = read_records::<_, T>(csv.as_bytes())
        .with_context(|| format!("parsing embedded {}", T::STEM))?;
    Ok(outcome.rows)
}

pub fn sample_data() -> Result<ShopData> {
    Ok(ShopData {
        jobs:       parse(JOBS_CSV)?,
        machines:   parse(MACHINES_CSV)?,
        operations: parse(OPERATIONS_CSV)?,
        routes:     parse(ROUTES_CSV)?,
    })
}

/// Load the sample shop into `shop`.
pub fn seed(shop: &mut Workshop) -> Result<ImportReport> {
    Ok(sample_data()?.apply(shop))
}

#[cfg(test)]
mod tests {
    use fjs_core::ShopConfig;
    use fjs_plan::Scheduler;

    use super::*;

    #[test]
    fn sample_loads_without_rejections() {
        let mut shop = Workshop::default();
        let report = seed(&mut shop).unwrap();
        assert_eq!((report.jobs, report.machines, report.operations, report.routes), (4, 6, 12, 21));
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn minimizing_plan_fits_default_horizon() {
        let mut shop = Workshop::default();
        seed(&mut shop).unwrap();
        let run = Scheduler::new(ShopConfig::default()).run(&shop).unwrap();
        assert!(run.is_complete());
        assert_eq!(run.fill.placed.len(), 12);
        assert!(run.makespan() <= 26);
    }
}
