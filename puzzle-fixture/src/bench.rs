//! Benchmark adapter: replays fixture cases for timing, without
//! correctness checking
//!
//! The adapter exposes each runnable case as a benchmarkable unit. The
//! enclosing driver controls iteration counts; every invocation constructs
//! a fresh solver and is independent of prior invocations.

use crate::case::Fixture;
use crate::error::BenchError;
use crate::executor;
use puzzle_solver::{SolverError, SolverRegistry};
use std::time::{Duration, Instant};

/// Number of runnable (non-ignored) cases in a fixture.
///
/// Parametrizes the driver's case-index range. Derived from
/// [`Fixture::runnable`], the same iterator the test executor consumes.
pub fn case_count(fixture: &Fixture) -> usize {
    fixture.runnable().count()
}

/// Consistency self-check: the adapter's case count must equal the count
/// the test executor treats as runnable for the same fixture.
///
/// A divergence indicates a parser or policy bug and is surfaced as
/// [`BenchError::CountMismatch`], never silently tolerated.
pub fn check_case_count(fixture: &Fixture) -> Result<usize, BenchError> {
    let bench = case_count(fixture);
    let executor = executor::runnable_case_count(fixture);
    if bench != executor {
        return Err(BenchError::CountMismatch { bench, executor });
    }
    Ok(bench)
}

/// Timing sample from a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchSample {
    pub iterations: u64,
    pub total: Duration,
}

impl BenchSample {
    /// Mean duration per iteration
    pub fn mean(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.total / self.iterations as u32
        }
    }
}

/// One benchmarkable unit: a runnable case's input paired with a solver
/// identity and a part number
pub struct BenchCase<'r> {
    registry: &'r SolverRegistry,
    year: u16,
    day: u8,
    part: u8,
    fixture_index: usize,
    input: String,
}

impl std::fmt::Debug for BenchCase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchCase")
            .field("year", &self.year)
            .field("day", &self.day)
            .field("part", &self.part)
            .field("fixture_index", &self.fixture_index)
            .field("input", &self.input)
            .finish()
    }
}

impl<'r> BenchCase<'r> {
    /// Select the `index`-th runnable case of the fixture.
    ///
    /// `index` ranges over `0..case_count(fixture)`; ignored cases are not
    /// addressable. The identity must be registered and the part within the
    /// solver's supported range.
    pub fn new(
        registry: &'r SolverRegistry,
        year: u16,
        day: u8,
        fixture: &Fixture,
        index: usize,
        part: u8,
    ) -> Result<Self, BenchError> {
        let count = case_count(fixture);
        let (fixture_index, case) = fixture
            .runnable()
            .nth(index)
            .ok_or(BenchError::CaseOutOfRange { index, count })?;

        let info = registry
            .info(year, day)
            .ok_or(SolverError::NotFound(year, day))?;
        if !(1..=info.parts).contains(&part) {
            return Err(BenchError::PartOutOfRange {
                part,
                parts: info.parts,
            });
        }

        Ok(Self {
            registry,
            year,
            day,
            part,
            fixture_index,
            input: case.input_text(),
        })
    }

    /// The case's original position in the fixture, for labeling output
    pub fn fixture_index(&self) -> usize {
        self.fixture_index
    }

    pub fn part(&self) -> u8 {
        self.part
    }

    /// One timed invocation: construct a fresh solver, solve the part.
    ///
    /// No correctness comparison is performed; the answer is discarded.
    pub fn run_once(&self) -> Result<Duration, BenchError> {
        let start = Instant::now();
        let mut solver = self
            .registry
            .create_solver(self.year, self.day, &self.input)?;
        solver.solve(self.part).map_err(SolverError::from)?;
        Ok(start.elapsed())
    }

    /// Run the requested number of iterations, each on a fresh solver
    pub fn run(&self, iterations: u64) -> Result<BenchSample, BenchError> {
        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            total += self.run_once()?;
        }
        Ok(BenchSample { iterations, total })
    }
}
