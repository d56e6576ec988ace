use anyhow::anyhow;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverPlugin, dispatch_parts,
};

pub struct CaptchaSolver;

inventory::submit! {
    SolverPlugin {
        year: 2017,
        day: 1,
        solver: &CaptchaSolver,
        tags: &["2017", "warmup"],
    }
}

/// Sum the digits whose partner `offset` positions ahead (circularly)
/// matches them
fn matching_sum(digits: &[u32], offset: usize) -> u32 {
    digits
        .iter()
        .enumerate()
        .filter(|&(i, &d)| d == digits[(i + offset) % digits.len()])
        .map(|(_, &d)| d)
        .sum()
}

impl PuzzleParser for CaptchaSolver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let digits: Vec<u32> = input
            .trim()
            .chars()
            .map(|c| c.to_digit(10).ok_or_else(|| anyhow!("expected a digit, got {c:?}")))
            .collect::<Result<_, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if digits.is_empty() {
            return Err(ParseError::MissingData("empty digit sequence".to_string()));
        }
        Ok(digits)
    }
}

impl PartSolver<1> for CaptchaSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(matching_sum(shared, 1).to_string())
    }
}

impl PartSolver<2> for CaptchaSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                anyhow!("digit sequence length {} is odd", shared.len()).into(),
            ));
        }
        Ok(matching_sum(shared, shared.len() / 2).to_string())
    }
}

impl Solver for CaptchaSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        dispatch_parts!(Self, shared, part, 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_digit_matches() {
        for (input, want) in [("1122", "3"), ("1111", "4"), ("1234", "0"), ("91212129", "9")] {
            let mut shared = CaptchaSolver::parse(input).unwrap();
            assert_eq!(
                <CaptchaSolver as PartSolver<1>>::solve(&mut shared).unwrap(),
                want,
                "input {input}"
            );
        }
    }

    #[test]
    fn halfway_digit_matches() {
        for (input, want) in [("1212", "6"), ("1221", "0"), ("123425", "4"), ("123123", "12")] {
            let mut shared = CaptchaSolver::parse(input).unwrap();
            assert_eq!(
                <CaptchaSolver as PartSolver<2>>::solve(&mut shared).unwrap(),
                want,
                "input {input}"
            );
        }
    }

    #[test]
    fn rejects_non_digits() {
        assert!(CaptchaSolver::parse("12a4").is_err());
    }

    #[test]
    fn empty_input_is_missing_data() {
        assert!(matches!(
            CaptchaSolver::parse("  \n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
