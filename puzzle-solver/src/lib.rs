//! Puzzle Solver Library
//!
//! A trait-based framework for two-part puzzle solvers across multiple years
//! and days. Each problem is implemented as a solver with custom input
//! parsing and can produce results for one or two parts.
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`PuzzleParser`],
//!   [`PartSolver`], [`Solver`])
//! - Type-erased solver instances for uniform dispatch ([`DynSolver`])
//! - A registry mapping (year, day) identities to solver factories,
//!   populated once at startup and read-only afterward ([`SolverRegistry`])
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver, register_solver};
//!
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2023, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugin Registration
//!
//! Solutions register themselves with `inventory::submit!` and a
//! [`SolverPlugin`] record; a binary collects them once at startup with
//! [`RegistryBuilder::register_all_plugins`]. The built registry is an
//! explicit value passed by reference into consumers, not ambient global
//! state.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by plugin submissions
pub use inventory;
