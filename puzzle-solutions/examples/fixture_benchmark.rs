//! Replay the catalogue fixtures through the benchmark adapter.
//!
//! Run with: cargo run --example fixture_benchmark --release
//!
//! For every registered solver, each runnable fixture case is timed per
//! part: a short warmup, then a measured batch. No correctness checking is
//! performed; parts the solver cannot answer for a given case are reported
//! and skipped.

use puzzle_fixture::{BenchCase, check_case_count, parse};
use puzzle_solver::RegistryBuilder;
use std::fs;
use std::path::PathBuf;

const WARMUP_ITERS: u64 = 10;
const MEASURE_ITERS: u64 = 200;

fn main() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("duplicate solver registration")
        .build();

    println!("Fixture Benchmark");
    println!("=================");
    println!(
        "{} solvers, {} warmup + {} measured iterations per case\n",
        registry.len(),
        WARMUP_ITERS,
        MEASURE_ITERS
    );

    for info in registry.iter_info() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(format!("year_{}", info.year))
            .join(format!("day_{}.txt", info.day));
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                println!("{}/{:02}: no fixture ({e})", info.year, info.day);
                continue;
            }
        };
        let fixture = parse(&contents).expect("fixture must parse");
        let count = check_case_count(&fixture).expect("case-count consistency");

        for index in 0..count {
            for part in 1..=info.parts {
                let case = BenchCase::new(&registry, info.year, info.day, &fixture, index, part)
                    .expect("runnable case");
                match case.run(WARMUP_ITERS) {
                    Ok(_) => {}
                    Err(e) => {
                        println!(
                            "{}/{:02} case {} part {}: skipped ({e})",
                            info.year,
                            info.day,
                            case.fixture_index(),
                            part
                        );
                        continue;
                    }
                }
                let sample = case.run(MEASURE_ITERS).expect("measured run");
                println!(
                    "{}/{:02} case {} part {}: {:?}/iter ({} iters in {:?})",
                    info.year,
                    info.day,
                    case.fixture_index(),
                    part,
                    sample.mean(),
                    sample.iterations,
                    sample.total
                );
            }
        }
    }
}
