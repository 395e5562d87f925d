//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fjs_core::Objective;
use fjs_io::Format;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "shopgrid",
    version,
    about = "Schedule a flexible job shop onto a machine × time grid.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory holding jobs, machines, operations and routes files.
    ///
    /// If omitted, the built-in sample shop is used.
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Representation used for `--data`, `--save-data` and `--out`.
    #[arg(long, value_enum, default_value = "text")]
    pub format: DataFormat,

    /// Shop configuration (TOML).  Missing keys take their defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Route preference; overrides the config file.
    #[arg(long, value_enum)]
    pub objective: Option<ObjectiveArg>,

    /// Where to write the exported schedule.
    #[arg(long, value_name = "FILE", default_value = "schedule.csv")]
    pub out: PathBuf,

    /// Also write the loaded shop data to this directory.
    #[arg(long, value_name = "DIR")]
    pub save_data: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHOPGRID_LOG` or `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum DataFormat {
    Text,
    Binary,
}

impl From<DataFormat> for Format {
    fn from(f: DataFormat) -> Self {
        match f {
            DataFormat::Text => Format::Text,
            DataFormat::Binary => Format::Binary,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum ObjectiveArg {
    Min,
    Max,
}

impl From<ObjectiveArg> for Objective {
    fn from(o: ObjectiveArg) -> Self {
        match o {
            ObjectiveArg::Min => Objective::Minimize,
            ObjectiveArg::Max => Objective::Maximize,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
