//! Test-mode driver: discover fixture files and run them through the
//! executor

use crate::config::Config;
use crate::error::CliError;
use crate::output::{OutputFormatter, Totals};
use puzzle_fixture::{parse, run_fixture};
use puzzle_solver::SolverRegistry;
use std::fs;
use std::io::ErrorKind;

/// Run every selected solver's fixture as a correctness test.
///
/// Returns `Ok(true)` when every parsed fixture passed. Parse failures and
/// case failures are reported and turn the result false without aborting
/// the remaining fixtures; a registered solver with no fixture file is
/// reported and skipped.
pub fn run_tests(
    registry: &SolverRegistry,
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<bool, CliError> {
    let infos: Vec<_> = registry.iter_info().filter(|i| config.selects(i)).collect();
    if infos.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(true);
    }

    let mut totals = Totals::default();
    let mut all_passed = true;

    for info in infos {
        let path = config.fixture_path(info.year, info.day);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                totals.missing += 1;
                formatter.print_missing_fixture(info.year, info.day, &path);
                continue;
            }
            Err(e) => return Err(CliError::Io { path, source: e }),
        };

        let fixture = match parse(&contents) {
            Ok(fixture) => fixture,
            Err(e) => {
                // A malformed fixture fails that fixture's run entirely,
                // with no partial results.
                all_passed = false;
                totals.fixtures += 1;
                totals.fixtures_failed += 1;
                eprintln!("{}", CliError::Fixture { path, source: e });
                continue;
            }
        };

        let verdict = run_fixture(registry, info.year, info.day, &fixture, &config.run_options)?;
        formatter.print_verdict(&verdict);
        totals.record(&verdict);
        all_passed &= verdict.passed();
    }

    formatter.print_summary(&totals);
    Ok(all_passed)
}
