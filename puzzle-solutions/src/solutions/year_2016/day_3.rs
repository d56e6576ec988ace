use anyhow::anyhow;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverPlugin, dispatch_parts,
};

pub struct TriangleSolver;

inventory::submit! {
    SolverPlugin {
        year: 2016,
        day: 3,
        solver: &TriangleSolver,
        tags: &["2016", "geometry"],
    }
}

/// A triangle is possible when the two smaller sides sum to more than the
/// largest
fn is_possible(mut sides: [u32; 3]) -> bool {
    sides.sort_unstable();
    sides[0] + sides[1] > sides[2]
}

impl PuzzleParser for TriangleSolver {
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<[u32; 3], anyhow::Error> {
                let sides: Vec<u32> = line
                    .split_whitespace()
                    .map(|tok| tok.parse().map_err(anyhow::Error::from))
                    .collect::<Result<_, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
                <[u32; 3]>::try_from(sides)
                    .map_err(|v| anyhow!("(line {}) expected 3 side lengths, got {}", line_idx + 1, v.len()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for TriangleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|&&t| is_possible(t)).count().to_string())
    }
}

impl PartSolver<2> for TriangleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::SolveFailed(
                anyhow!("row count {} is not a multiple of three", shared.len()).into(),
            ));
        }
        let count = shared
            .chunks_exact(3)
            .flat_map(|rows| (0..3).map(|col| [rows[0][col], rows[1][col], rows[2][col]]))
            .filter(|&t| is_possible(t))
            .count();
        Ok(count.to_string())
    }
}

impl Solver for TriangleSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        dispatch_parts!(Self, shared, part, 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_triangle_counts() {
        let mut shared = TriangleSolver::parse("3 4 5").unwrap();
        assert_eq!(<TriangleSolver as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
    }

    #[test]
    fn degenerate_triangle_does_not_count() {
        let mut shared = TriangleSolver::parse("5 10 25").unwrap();
        assert_eq!(<TriangleSolver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn vertical_grouping_reads_columns() {
        let input = "101 301 501\n102 302 502\n103 303 503";
        let mut shared = TriangleSolver::parse(input).unwrap();
        assert_eq!(<TriangleSolver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
        assert_eq!(<TriangleSolver as PartSolver<2>>::solve(&mut shared).unwrap(), "3");
    }

    #[test]
    fn vertical_grouping_needs_full_triples() {
        let mut shared = TriangleSolver::parse("3 4 5\n3 4 5").unwrap();
        assert!(matches!(
            <TriangleSolver as PartSolver<2>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_short_rows() {
        assert!(TriangleSolver::parse("3 4").is_err());
    }
}
