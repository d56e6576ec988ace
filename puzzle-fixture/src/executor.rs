//! Test executor: runs a fixture's cases against a registered solver
//!
//! Execution is strictly sequential, one case and one part at a time. Each
//! case gets its own fresh solver instance; the registry is only read. A
//! failing case never aborts its siblings: the whole fixture is executed and
//! every failure reported together.

use crate::case::{Fixture, TestCase};
use puzzle_solver::{SolverError, SolverRegistry};
use std::time::{Duration, Instant};

/// Run-time configuration for one fixture run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Restrict execution to one part. Applied on top of each case's own
    /// `part` option and present expected values: the filter only
    /// restricts the (case, part) set, never expands it.
    pub part_filter: Option<u8>,
    /// Budget for `long` cases: a case whose `long` estimate exceeds this
    /// is recorded as skipped. `None` disables the gate entirely.
    pub long_budget: Option<Duration>,
}

/// Why a runnable case was not evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The case's `long` estimate exceeds the configured budget
    LongBudget {
        estimate: Duration,
        budget: Duration,
    },
    /// The part filter (or the case's own declarations) left nothing to run
    PartFilter,
}

/// Outcome of evaluating one part of one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome {
    /// Solver output matched the expected value
    Passed { answer: String },
    /// Solver succeeded but the output differs; both values are retained
    /// for diagnostics
    Mismatch { expected: String, actual: String },
    /// The solver itself failed; the description is retained
    Failed { error: String },
}

/// Evaluation record for one part of one case
#[derive(Debug, Clone)]
pub struct PartReport {
    pub part: u8,
    pub outcome: PartOutcome,
    pub solve_duration: Duration,
}

impl PartReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, PartOutcome::Passed { .. })
    }
}

/// Per-case record in a verdict. Ignored cases produce no report at all.
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// The case's position in the fixture (diagnostic index)
    pub index: usize,
    /// Set when the case was skipped instead of evaluated
    pub skipped: Option<SkipReason>,
    /// One report per evaluated part
    pub parts: Vec<PartReport>,
}

impl CaseReport {
    pub fn failed(&self) -> bool {
        self.parts.iter().any(|p| !p.passed())
    }
}

/// Aggregated result of running one fixture
#[derive(Debug, Clone)]
pub struct Verdict {
    pub year: u16,
    pub day: u8,
    pub reports: Vec<CaseReport>,
}

impl Verdict {
    /// The fixture passes iff every evaluated part passed
    pub fn passed(&self) -> bool {
        !self.reports.iter().any(CaseReport::failed)
    }

    /// Number of cases that were evaluated (at least one part run)
    pub fn evaluated_cases(&self) -> usize {
        self.reports.iter().filter(|r| r.skipped.is_none()).count()
    }

    /// Number of cases recorded as skipped (budget or part filter)
    pub fn skipped_cases(&self) -> usize {
        self.reports.iter().filter(|r| r.skipped.is_some()).count()
    }

    /// Number of evaluated cases with at least one failing part
    pub fn failed_cases(&self) -> usize {
        self.reports.iter().filter(|r| r.failed()).count()
    }

    /// Number of runnable cases this verdict covers (evaluated + skipped).
    /// The benchmark adapter's case count must always equal this.
    pub fn runnable_cases(&self) -> usize {
        self.reports.len()
    }

    /// Total number of evaluated (case, part) pairs
    pub fn evaluated_parts(&self) -> usize {
        self.reports.iter().map(|r| r.parts.len()).sum()
    }
}

/// What the executor decided to do with one case
enum Plan {
    /// `ignore=true`: parsed but never executed or counted
    Ignore,
    /// Recorded as skipped, counted separately from pass/fail
    Skip(SkipReason),
    /// Evaluate these parts, in order
    Run(Vec<u8>),
}

/// The skip/selection ladder for one case, in policy order
fn plan_case(case: &TestCase, options: &RunOptions) -> Plan {
    if case.options.ignore {
        return Plan::Ignore;
    }
    if let (Some(estimate), Some(budget)) = (case.options.long, options.long_budget) {
        if estimate > budget {
            return Plan::Skip(SkipReason::LongBudget { estimate, budget });
        }
    }
    let parts: Vec<u8> = (1..=2)
        .filter(|&p| case.declares_part(p) && options.part_filter.is_none_or(|f| f == p))
        .collect();
    if parts.is_empty() {
        return Plan::Skip(SkipReason::PartFilter);
    }
    Plan::Run(parts)
}

/// Number of cases the executor would treat as runnable under default
/// options: everything except ignored cases. Walks the same decision
/// ladder as [`run_fixture`]; the benchmark adapter cross-checks its own
/// count against this.
pub fn runnable_case_count(fixture: &Fixture) -> usize {
    let options = RunOptions::default();
    fixture
        .cases
        .iter()
        .filter(|case| !matches!(plan_case(case, &options), Plan::Ignore))
        .count()
}

/// Run a fixture against the solver registered for `(year, day)`.
///
/// A missing registry entry fails the whole fixture up front. Per-case
/// solver failures and output mismatches are recorded and never abort the
/// remaining cases.
pub fn run_fixture(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    fixture: &Fixture,
    options: &RunOptions,
) -> Result<Verdict, SolverError> {
    if !registry.contains(year, day) {
        return Err(SolverError::NotFound(year, day));
    }

    let mut reports = Vec::new();
    for (index, case) in fixture.cases.iter().enumerate() {
        let parts = match plan_case(case, options) {
            Plan::Ignore => continue,
            Plan::Skip(reason) => {
                reports.push(CaseReport {
                    index,
                    skipped: Some(reason),
                    parts: Vec::new(),
                });
                continue;
            }
            Plan::Run(parts) => parts,
        };

        reports.push(evaluate_case(registry, year, day, index, case, &parts));
    }

    Ok(Verdict { year, day, reports })
}

/// Construct one fresh solver for the case and evaluate the selected parts
fn evaluate_case(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    index: usize,
    case: &TestCase,
    parts: &[u8],
) -> CaseReport {
    let input = case.input_text();

    let start = Instant::now();
    let mut solver = match registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => {
            // Input rejected by the solver's parser: every selected part
            // fails with the failure description.
            let construct_duration = start.elapsed();
            let error = e.to_string();
            return CaseReport {
                index,
                skipped: None,
                parts: parts
                    .iter()
                    .map(|&part| PartReport {
                        part,
                        outcome: PartOutcome::Failed {
                            error: error.clone(),
                        },
                        solve_duration: construct_duration,
                    })
                    .collect(),
            };
        }
    };

    let part_reports = parts
        .iter()
        .map(|&part| {
            // plan_case only selects parts with an expected value present
            let expected = case.expected(part).unwrap_or_default();
            let start = Instant::now();
            let result = solver.solve(part);
            let solve_duration = start.elapsed();

            let outcome = match result {
                Ok(res) if res.answer == expected => PartOutcome::Passed { answer: res.answer },
                Ok(res) => PartOutcome::Mismatch {
                    expected: expected.to_string(),
                    actual: res.answer,
                },
                Err(e) => PartOutcome::Failed {
                    error: e.to_string(),
                },
            };

            PartReport {
                part,
                outcome,
                solve_duration,
            }
        })
        .collect();

    CaseReport {
        index,
        skipped: None,
        parts: part_reports,
    }
}
