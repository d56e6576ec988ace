//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing separate from solving.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), giving compile-time
/// checking that the part is implemented.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all puzzle solvers implement.
///
/// Extends `PuzzleParser` to inherit the `SharedData` type and `parse()`.
/// Each solver handles one year-day problem and dispatches part numbers to
/// the matching `PartSolver` impl.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

/// Dispatch a part number to the matching `PartSolver` impl.
///
/// Used in `Solver::solve_part` bodies to avoid writing the match by hand:
///
/// ```ignore
/// fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///     puzzle_solver::dispatch_parts!(Self, shared, part, 1, 2)
/// }
/// ```
#[macro_export]
macro_rules! dispatch_parts {
    ($solver:ty, $shared:expr, $part:expr, $($n:literal),+) => {
        match $part {
            $($n => <$solver as $crate::PartSolver<$n>>::solve($shared),)+
            other => Err($crate::SolveError::PartNotImplemented(other)),
        }
    };
}
