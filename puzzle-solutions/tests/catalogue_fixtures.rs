//! Runs every registered solver against its fixture file
//!
//! This is the catalogue-wide safety net: each solver's fixture under
//! `testdata/` must parse, pass, and agree with the benchmark adapter
//! about its runnable case count.

use puzzle_fixture::{Fixture, RunOptions, check_case_count, parse, run_fixture};
use puzzle_solutions as _;
use puzzle_solver::{RegistryBuilder, SolverRegistry};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("duplicate solver registration")
        .build()
}

fn fixture_path(year: u16, day: u8) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(format!("year_{year}"))
        .join(format!("day_{day}.txt"))
}

fn load_fixture(year: u16, day: u8) -> Fixture {
    let path = fixture_path(year, day);
    let contents =
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    parse(&contents).unwrap_or_else(|e| panic!("parse {}: {e}", path.display()))
}

#[test]
fn every_registered_solver_passes_its_fixture() {
    let registry = registry();
    assert!(!registry.is_empty());

    for info in registry.iter_info() {
        let fixture = load_fixture(info.year, info.day);
        let verdict = run_fixture(
            &registry,
            info.year,
            info.day,
            &fixture,
            &RunOptions::default(),
        )
        .unwrap();
        assert!(
            verdict.passed(),
            "{}/{} failed: {:#?}",
            info.year,
            info.day,
            verdict
        );
        assert!(verdict.evaluated_cases() > 0, "{}/{} ran nothing", info.year, info.day);
    }
}

#[test]
fn benchmark_count_agrees_with_executor_for_every_fixture() {
    let registry = registry();
    for info in registry.iter_info() {
        let fixture = load_fixture(info.year, info.day);
        let count = check_case_count(&fixture)
            .unwrap_or_else(|e| panic!("{}/{}: {e}", info.year, info.day));
        let verdict = run_fixture(
            &registry,
            info.year,
            info.day,
            &fixture,
            &RunOptions::default(),
        )
        .unwrap();
        assert_eq!(count, verdict.runnable_cases(), "{}/{}", info.year, info.day);
    }
}

#[test]
fn ignored_catalogue_cases_never_count() {
    // 2015/1 carries an ignore=true case with a deliberately wrong
    // expected value; the fixture must still pass.
    let registry = registry();
    let fixture = load_fixture(2015, 1);
    let verdict =
        run_fixture(&registry, 2015, 1, &fixture, &RunOptions::default()).unwrap();
    assert!(verdict.passed());
    assert_eq!(verdict.runnable_cases(), 3);
    assert_eq!(fixture.cases.len(), 4);
}

#[test]
fn tight_budget_skips_the_long_triangle_case() {
    // 2016/3's six-row case is annotated long=2s
    let registry = registry();
    let fixture = load_fixture(2016, 3);
    let verdict = run_fixture(
        &registry,
        2016,
        3,
        &fixture,
        &RunOptions {
            long_budget: Some(Duration::from_secs(1)),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(verdict.passed());
    assert_eq!(verdict.skipped_cases(), 1);
    assert_eq!(verdict.evaluated_cases(), 2);
}
