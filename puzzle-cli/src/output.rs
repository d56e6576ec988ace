//! Output formatting for test and benchmark runs

use puzzle_fixture::{BenchSample, PartOutcome, SkipReason, Verdict};
use std::path::Path;
use std::time::Instant;

/// Aggregate counters across every fixture in a run
#[derive(Debug, Default, Clone, Copy)]
pub struct Totals {
    pub fixtures: usize,
    pub fixtures_failed: usize,
    pub missing: usize,
    pub cases_evaluated: usize,
    pub cases_skipped: usize,
    pub cases_failed: usize,
    pub parts_evaluated: usize,
}

impl Totals {
    pub fn record(&mut self, verdict: &Verdict) {
        self.fixtures += 1;
        if !verdict.passed() {
            self.fixtures_failed += 1;
        }
        self.cases_evaluated += verdict.evaluated_cases();
        self.cases_skipped += verdict.skipped_cases();
        self.cases_failed += verdict.failed_cases();
        self.parts_evaluated += verdict.evaluated_parts();
    }
}

/// Console formatter for run results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print every case's individual result for one fixture.
    ///
    /// Quiet mode suppresses passing lines; failures and budget skips are
    /// always shown.
    pub fn print_verdict(&self, verdict: &Verdict) {
        let id = format!("{}/{:02}", verdict.year, verdict.day);
        for report in &verdict.reports {
            match report.skipped {
                Some(SkipReason::LongBudget { estimate, budget }) => {
                    println!(
                        "{id} case {}: skipped (long {} exceeds budget {})",
                        report.index,
                        humantime::format_duration(estimate),
                        humantime::format_duration(budget)
                    );
                }
                Some(SkipReason::PartFilter) => {
                    if !self.quiet {
                        println!("{id} case {}: skipped (no matching parts)", report.index);
                    }
                }
                None => {
                    for part in &report.parts {
                        match &part.outcome {
                            PartOutcome::Passed { answer } => {
                                if !self.quiet {
                                    println!(
                                        "{id} case {} part {}: ok ({answer}) [{:?}]",
                                        report.index, part.part, part.solve_duration
                                    );
                                }
                            }
                            PartOutcome::Mismatch { expected, actual } => {
                                println!(
                                    "{id} case {} part {}: FAIL expected `{expected}`, got `{actual}`",
                                    report.index, part.part
                                );
                            }
                            PartOutcome::Failed { error } => {
                                println!(
                                    "{id} case {} part {}: ERROR {error}",
                                    report.index, part.part
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    /// Report a registered solver whose fixture file does not exist
    pub fn print_missing_fixture(&self, year: u16, day: u8, path: &Path) {
        if !self.quiet {
            println!("{year}/{day:02}: no fixture at {}", path.display());
        }
    }

    /// One benchmark measurement line
    pub fn print_bench_result(
        &self,
        year: u16,
        day: u8,
        case_index: usize,
        part: u8,
        sample: &BenchSample,
    ) {
        println!(
            "{year}/{day:02} case {case_index} part {part}: {:?}/iter ({} iters in {:?})",
            sample.mean(),
            sample.iterations,
            sample.total
        );
    }

    /// A benchmark combination the solver cannot execute
    pub fn print_bench_skip(&self, year: u16, day: u8, case_index: usize, part: u8, error: &str) {
        if !self.quiet {
            println!("{year}/{day:02} case {case_index} part {part}: skipped ({error})");
        }
    }

    /// Print the run summary
    pub fn print_summary(&self, totals: &Totals) {
        let elapsed = self.start_time.elapsed();
        let finished = chrono::Local::now().format("%H:%M:%S");

        println!();
        println!(
            "{} fixture(s): {} failed, {} without fixture file",
            totals.fixtures, totals.fixtures_failed, totals.missing
        );
        println!(
            "{} case(s) evaluated ({} part runs), {} failed, {} skipped",
            totals.cases_evaluated,
            totals.parts_evaluated,
            totals.cases_failed,
            totals.cases_skipped
        );
        println!("finished {finished} in {elapsed:?}");
    }
}
