//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// What the binary does with the discovered fixtures
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// Run correctness tests: compare solver output against expected values
    #[default]
    Test,
    /// Replay fixture cases for timing, without correctness checking
    Bench,
}

/// Puzzle fixture runner
#[derive(Parser, Debug)]
#[command(name = "puzzle", about = "Run puzzle solvers against their fixtures", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding fixture files (year_<year>/day_<day>.txt)
    #[arg(long, default_value = "puzzle-solutions/testdata")]
    pub fixtures: PathBuf,

    /// Budget for `long` cases; cases estimated above it are skipped
    #[arg(long, value_parser = humantime::parse_duration)]
    pub long_budget: Option<Duration>,

    /// Run correctness tests or benchmarks
    #[arg(short, long, value_enum, default_value = "test")]
    pub mode: Mode,

    /// Measured iterations per benchmark case
    #[arg(long, default_value_t = 50)]
    pub bench_iters: u64,

    /// Quiet mode - only report failures and the summary
    #[arg(short, long)]
    pub quiet: bool,
}
