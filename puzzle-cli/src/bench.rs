//! Bench-mode driver: replay fixtures through the benchmark adapter

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormatter;
use puzzle_fixture::{BenchCase, check_case_count, parse};
use puzzle_solver::SolverRegistry;
use std::fs;
use std::io::ErrorKind;

/// Benchmark every selected solver's fixture cases.
///
/// Before timing anything, the adapter's case count is cross-checked
/// against the executor's runnable count; a mismatch is a harness bug and
/// aborts the run as a hard error. Parts a solver cannot execute for a
/// given case are reported and skipped.
pub fn run_benchmarks(
    registry: &SolverRegistry,
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<bool, CliError> {
    let infos: Vec<_> = registry.iter_info().filter(|i| config.selects(i)).collect();
    if infos.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(true);
    }

    let mut all_ok = true;

    for info in infos {
        let path = config.fixture_path(info.year, info.day);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                formatter.print_missing_fixture(info.year, info.day, &path);
                continue;
            }
            Err(e) => return Err(CliError::Io { path, source: e }),
        };

        let fixture = match parse(&contents) {
            Ok(fixture) => fixture,
            Err(e) => {
                all_ok = false;
                eprintln!("{}", CliError::Fixture { path, source: e });
                continue;
            }
        };

        let count = check_case_count(&fixture)?;

        for index in 0..count {
            for part in 1..=info.parts {
                if config.run_options.part_filter.is_some_and(|p| p != part) {
                    continue;
                }
                let case = BenchCase::new(registry, info.year, info.day, &fixture, index, part)?;

                // Warmup doubles as a probe: a part the solver cannot
                // answer for this input is skipped, not failed.
                if let Err(e) = case.run_once() {
                    formatter.print_bench_skip(
                        info.year,
                        info.day,
                        case.fixture_index(),
                        part,
                        &e.to_string(),
                    );
                    continue;
                }

                match case.run(config.bench_iters) {
                    Ok(sample) => formatter.print_bench_result(
                        info.year,
                        info.day,
                        case.fixture_index(),
                        part,
                        &sample,
                    ),
                    Err(e) => formatter.print_bench_skip(
                        info.year,
                        info.day,
                        case.fixture_index(),
                        part,
                        &e.to_string(),
                    ),
                }
            }
        }
    }

    Ok(all_ok)
}
