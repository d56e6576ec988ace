use anyhow::anyhow;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverPlugin, dispatch_parts,
};

pub struct FloorSolver;

inventory::submit! {
    SolverPlugin {
        year: 2015,
        day: 1,
        solver: &FloorSolver,
        tags: &["2015", "warmup"],
    }
}

impl PuzzleParser for FloorSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(anyhow!("unexpected character {other:?}, want '(' or ')'")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for FloorSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for FloorSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut floor = 0;
        for (pos, step) in shared.iter().enumerate() {
            floor += step;
            if floor < 0 {
                return Ok((pos + 1).to_string());
            }
        }
        Err(SolveError::Unsatisfiable(
            "the floor never goes below ground level".to_string(),
        ))
    }
}

impl Solver for FloorSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        dispatch_parts!(Self, shared, part, 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_input_ends_on_ground_floor() {
        let mut shared = FloorSolver::parse("(())").unwrap();
        assert_eq!(<FloorSolver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn first_basement_position() {
        let mut shared = FloorSolver::parse("()())").unwrap();
        assert_eq!(<FloorSolver as PartSolver<2>>::solve(&mut shared).unwrap(), "5");
    }

    #[test]
    fn never_reaching_basement_is_unsatisfiable() {
        let mut shared = FloorSolver::parse("((((").unwrap();
        let err = <FloorSolver as PartSolver<2>>::solve(&mut shared).unwrap_err();
        assert!(matches!(err, SolveError::Unsatisfiable(_)));
    }

    #[test]
    fn rejects_stray_characters() {
        assert!(FloorSolver::parse("(x)").is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The final floor is always the parenthesis balance
            #[test]
            fn final_floor_equals_balance(steps in prop::collection::vec(any::<bool>(), 0..64)) {
                let input: String = steps.iter().map(|&up| if up { '(' } else { ')' }).collect();
                let ups = steps.iter().filter(|&&up| up).count() as i32;
                let balance = ups - (steps.len() as i32 - ups);

                let mut shared = FloorSolver::parse(&input).unwrap();
                prop_assert_eq!(
                    <FloorSolver as PartSolver<1>>::solve(&mut shared).unwrap(),
                    balance.to_string()
                );
            }
        }
    }
}
