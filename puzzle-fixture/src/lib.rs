//! Fixture-driven test and benchmark harness for puzzle solvers
//!
//! The one component shared across the whole solver catalogue. A fixture
//! file describes one or more test cases — an input block, expected outputs,
//! and per-case directives — and two read-only consumers replay it:
//!
//! - the **test executor** ([`run_fixture`]) constructs a fresh solver per
//!   case, applies skip/selection policy, compares actual vs. expected
//!   output, and aggregates a [`Verdict`] without stopping at the first
//!   failure;
//! - the **benchmark adapter** ([`BenchCase`]) exposes each runnable case
//!   as a timed unit with no correctness comparison.
//!
//! Both consumers take the [`SolverRegistry`](puzzle_solver::SolverRegistry)
//! by reference and derive their case sets from the same
//! [`Fixture::runnable`] iterator, so their case counts cannot drift;
//! [`check_case_count`] asserts this invariant explicitly.
//!
//! # Example
//!
//! ```
//! use puzzle_fixture::{parse, run_fixture, RunOptions};
//! use puzzle_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver, register_solver};
//!
//! struct Doubler;
//!
//! impl PuzzleParser for Doubler {
//!     type SharedData<'a> = i64;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.trim().parse().map_err(|_| ParseError::InvalidFormat("bad int".into()))
//!     }
//! }
//!
//! impl Solver for Doubler {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok((*shared * 2).to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Doubler, 2020, 1);
//! let registry = builder.build();
//!
//! let fixture = parse("21\n===\npart1: 42\n").unwrap();
//! let verdict = run_fixture(&registry, 2020, 1, &fixture, &RunOptions::default()).unwrap();
//! assert!(verdict.passed());
//! ```

mod bench;
mod case;
mod error;
mod executor;
mod parse;

// Re-export public API
pub use bench::{BenchCase, BenchSample, case_count, check_case_count};
pub use case::{CaseOptions, Fixture, TestCase};
pub use error::{BenchError, FixtureError};
pub use executor::{
    CaseReport, PartOutcome, PartReport, RunOptions, SkipReason, Verdict, run_fixture,
    runnable_case_count,
};
pub use parse::{CASE_SEPARATOR, EXPECTED_MARKER, parse};
