//! Error types for the fixture harness

use puzzle_solver::SolverError;
use thiserror::Error;

/// Error type for fixture parsing
///
/// All variants carry the 1-based line number the parser was looking at,
/// so a malformed fixture is reported with file/line context and no partial
/// `Fixture` is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The file ended inside a case's input block
    #[error("line {line}: file ends mid-case (missing `{marker}` expected-output marker)")]
    UnexpectedEof { line: usize, marker: &'static str },

    /// A case separator appeared before the expected-output marker
    #[error("line {line}: case separator before expected-output marker")]
    SeparatorBeforeExpected { line: usize },

    /// More than one expected value for the same part in one case
    #[error("line {line}: duplicate expected value for part {part}")]
    DuplicateExpected { line: usize, part: u8 },

    /// A line in the expected block is neither an expected value nor an option
    #[error("line {line}: expected `part1:`, `part2:` or a `key=value` option, got `{content}`")]
    MalformedExpectedLine { line: usize, content: String },

    /// An option key the parser does not know
    #[error("line {line}: unknown option key `{key}`")]
    UnknownOption { line: usize, key: String },

    /// The same option declared twice in one case
    #[error("line {line}: duplicate option `{key}`")]
    DuplicateOption { line: usize, key: String },

    /// An option value of the wrong type
    #[error("line {line}: invalid value `{value}` for option `{key}`: {message}")]
    InvalidOptionValue {
        line: usize,
        key: String,
        value: String,
        message: String,
    },
}

/// Error type for the benchmark adapter
#[derive(Debug, Error)]
pub enum BenchError {
    /// The requested case index exceeds the runnable case count
    #[error("benchmark case index {index} out of range ({count} runnable cases)")]
    CaseOutOfRange { index: usize, count: usize },

    /// The requested part exceeds what the registered solver supports
    #[error("benchmark part {part} out of range (solver supports {parts} parts)")]
    PartOutOfRange { part: u8, parts: u8 },

    /// Registry lookup or solver construction failed
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// The adapter and the executor disagree about the runnable case count.
    /// This indicates a harness bug and must fail the run.
    #[error("benchmark case count {bench} does not match executor-runnable count {executor}")]
    CountMismatch { bench: usize, executor: usize },
}
