//! Property-based tests for solver part bounds validation

use proptest::prelude::*;
use puzzle_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverExt};

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> PuzzleParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any solver with PARTS = N, `solve_part_checked_range(part)` with
    /// part = 0 or part > N returns `PartOutOfRange(part)`; parts inside
    /// the range succeed.
    #[test]
    fn out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let mut shared = ();

        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked_range(&mut shared, part),
            2 => TestSolver::<2>::solve_part_checked_range(&mut shared, part),
            _ => TestSolver::<3>::solve_part_checked_range(&mut shared, part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// For parts inside 1..=PARTS, `solve_part_checked_range` delegates to
    /// `solve_part` unchanged.
    #[test]
    fn valid_range_delegation(part in 1u8..=2) {
        let mut shared = ();
        let mut shared2 = ();

        let checked = TestSolver::<2>::solve_part_checked_range(&mut shared, part);
        let direct = TestSolver::<2>::solve_part(&mut shared2, part);

        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}
