//! Puzzle CLI - run solver fixtures as correctness tests or benchmarks

mod bench;
mod cli;
mod config;
mod error;
mod output;
mod runner;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::{Args, Mode};
use config::Config;
use error::CliError;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};

fn main() {
    let args = Args::parse();

    match run(args) {
        // Some evaluated case failed (or a fixture failed to parse);
        // details were already reported per case.
        Ok(false) => std::process::exit(1),
        Ok(true) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<bool, CliError> {
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let formatter = OutputFormatter::new(config.quiet);

    match config.mode {
        Mode::Test => runner::run_tests(&registry, &config, &formatter),
        Mode::Bench => bench::run_benchmarks(&registry, &config, &formatter),
    }
}

/// Collect registered solver plugins, optionally filtered by tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();
    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().any(|t| plugin.tags.contains(&t.as_str()))
        })?
    };
    Ok(builder.build())
}
