//! Configuration resolution from CLI args

use crate::cli::{Args, Mode};
use puzzle_fixture::RunOptions;
use puzzle_solver::SolverInfo;
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding fixture files
    pub fixture_dir: PathBuf,
    /// Part filter and long-case budget handed to the executor
    pub run_options: RunOptions,
    /// Test or bench mode
    pub mode: Mode,
    /// Measured iterations per benchmark case
    pub bench_iters: u64,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            tags: args.tags,
            fixture_dir: args.fixtures,
            run_options: RunOptions {
                part_filter: args.part,
                long_budget: args.long_budget,
            },
            mode: args.mode,
            bench_iters: args.bench_iters,
            quiet: args.quiet,
        }
    }

    /// Whether the year/day filters select this solver
    pub fn selects(&self, info: &SolverInfo) -> bool {
        self.year_filter.is_none_or(|y| info.year == y)
            && self.day_filter.is_none_or(|d| info.day == d)
    }

    /// Path of the fixture file for a solver identity
    pub fn fixture_path(&self, year: u16, day: u8) -> PathBuf {
        self.fixture_dir
            .join(format!("year_{year}"))
            .join(format!("day_{day}.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        Config::from_args(Args::parse_from(argv))
    }

    #[test]
    fn filters_select_matching_identities() {
        let config = config(&["puzzle", "--year", "2016"]);
        let hit = SolverInfo { year: 2016, day: 3, parts: 2 };
        let miss = SolverInfo { year: 2015, day: 1, parts: 2 };
        assert!(config.selects(&hit));
        assert!(!config.selects(&miss));
    }

    #[test]
    fn fixture_path_follows_layout() {
        let config = config(&["puzzle", "--fixtures", "testdata"]);
        assert_eq!(
            config.fixture_path(2016, 3),
            PathBuf::from("testdata/year_2016/day_3.txt")
        );
    }
}
