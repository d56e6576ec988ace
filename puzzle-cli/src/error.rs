//! Error types for the CLI

use puzzle_fixture::{BenchError, FixtureError};
use puzzle_solver::{RegistrationError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Fixture file failed to parse
    #[error("{path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: FixtureError,
    },

    /// Fixture file could not be read
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error (missing identity)
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Registration error (duplicate identity at startup)
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Benchmark adapter error, including the case-count consistency check
    #[error("Benchmark error: {0}")]
    Bench(#[from] BenchError),
}
