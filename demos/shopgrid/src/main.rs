//! shopgrid: batch driver for the flexible job-shop scheduler.
//!
//! Loads a shop from `--data` (or seeds the built-in sample), selects one
//! route per operation, places the plan on the machine × time grid and
//! writes the resulting schedule.

mod cli;
mod logging;
mod seed;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use fjs_core::{MachineId, ShopConfig};
use fjs_io::{Format, ShopData, write_schedule};
use fjs_plan::{ScheduleRun, Scheduler, Workshop};

use cli::CliArgs;

fn main() {
    if let Err(err) = run_main() {
        eprintln!("shopgrid error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}

fn run(args: CliArgs) -> Result<()> {
    let t0 = Instant::now();
    let format = Format::from(args.format);

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ShopConfig::default(),
    };
    if let Some(o) = args.objective {
        config.objective = o.into();
    }

    // ── Load ──────────────────────────────────────────────────────────────
    let mut shop = Workshop::new(config.clone())?;
    let report = match &args.data {
        Some(dir) => ShopData::import_into(dir, format, &mut shop)
            .with_context(|| format!("loading shop data from {}", dir.display()))?,
        None => seed::seed(&mut shop)?,
    };
    println!(
        "Loaded {} jobs, {} machines, {} operations, {} routes ({} rejected, {} lines skipped)",
        report.jobs, report.machines, report.operations, report.routes, report.rejected, report.skipped,
    );

    if let Some(dir) = &args.save_data {
        ShopData::from_workshop(&shop)
            .save(dir, format)
            .with_context(|| format!("saving shop data to {}", dir.display()))?;
        info!(dir = %dir.display(), "shop data saved");
    }

    // ── Schedule ──────────────────────────────────────────────────────────
    let run = Scheduler::for_workshop(&shop).run(&shop)?;
    print_summary(&config, &run);

    write_schedule(&args.out, &run.records, format)
        .with_context(|| format!("writing schedule to {}", args.out.display()))?;
    println!(
        "Wrote {} schedule records to {} in {:.1} ms",
        run.records.len(),
        args.out.display(),
        t0.elapsed().as_secs_f64() * 1e3,
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<ShopConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: ShopConfig = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn print_summary(config: &ShopConfig, run: &ScheduleRun) {
    println!();
    println!(
        "Objective {:?}, horizon {}, makespan {}",
        config.objective,
        config.horizon,
        run.makespan(),
    );
    println!("{:>8}  {:>5}  {:>4}  {:>8}", "machine", "ops", "busy", "last end");
    for m in 1..=config.machine_count {
        let machine = MachineId(m);
        let mut ops = 0;
        let mut busy = 0;
        for rec in run.records.iter().filter(|r| r.machine == machine) {
            ops += 1;
            busy += rec.duration();
        }
        let last = run
            .grid
            .last_end_on_machine(machine)
            .map_or_else(|| "-".to_string(), |e| e.to_string());
        println!("{:>8}  {:>5}  {:>4}  {:>8}", m, ops, busy, last);
    }

    for failure in &run.work_plan.failures {
        println!("job {} not planned: {}", failure.job, failure.error);
    }
    for skipped in &run.fill.skipped {
        println!(
            "operation {} of job {} not placed: {}",
            skipped.entry.operation, skipped.entry.job, skipped.error,
        );
    }
    println!();
}
