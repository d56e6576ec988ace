//! Fixture file parser
//!
//! The format is line-oriented. A case accumulates verbatim input lines
//! until the expected-output marker, after which each line encodes either
//! one part's expected result or a `key=value` option. Cases are separated
//! by the case-separator line:
//!
//! ```text
//! 3 4 5
//! ===
//! part1: 1
//! ---
//! 101 301 501
//! 201 401 601
//! ===
//! part2: 2
//! long=30s
//! ```
//!
//! Input lines are taken verbatim; by format contract they must not collide
//! with the two marker lines. Parsing is total and deterministic: identical
//! bytes always yield an identical [`Fixture`], and
//! [`Fixture::to_fixture_string`] emits a canonical form that re-parses to
//! the same records.

use crate::case::{Fixture, TestCase};
use crate::error::FixtureError;

/// Marker line ending a case's input block and starting its expected block
pub const EXPECTED_MARKER: &str = "===";
/// Marker line separating two cases
pub const CASE_SEPARATOR: &str = "---";

/// Parser state: which block of the current case lines belong to
enum State {
    /// Accumulating verbatim input lines
    Input,
    /// Reading expected values and options
    Expected,
}

/// Parse a fixture file's contents into an ordered sequence of test cases.
///
/// Fails without producing a partial fixture when a case boundary is
/// malformed, an option value is not of the declared type, or the file ends
/// mid-case. Every error carries the 1-based line number.
pub fn parse(contents: &str) -> Result<Fixture, FixtureError> {
    let mut cases = Vec::new();
    let mut current = TestCase::default();
    let mut state = State::Input;
    let mut case_started = false;
    let mut ignore_seen = false;
    let mut last_line = 0;

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        match state {
            State::Input => {
                if line == EXPECTED_MARKER {
                    state = State::Expected;
                    case_started = true;
                } else if line == CASE_SEPARATOR {
                    return Err(FixtureError::SeparatorBeforeExpected { line: line_no });
                } else {
                    current.input.push(line.to_string());
                    case_started = true;
                }
            }
            State::Expected => {
                if line == CASE_SEPARATOR {
                    cases.push(std::mem::take(&mut current));
                    state = State::Input;
                    case_started = false;
                    ignore_seen = false;
                } else if let Some(value) = line.strip_prefix("part1:") {
                    if current.expected_part1.is_some() {
                        return Err(FixtureError::DuplicateExpected {
                            line: line_no,
                            part: 1,
                        });
                    }
                    current.expected_part1 = Some(value.trim().to_string());
                } else if let Some(value) = line.strip_prefix("part2:") {
                    if current.expected_part2.is_some() {
                        return Err(FixtureError::DuplicateExpected {
                            line: line_no,
                            part: 2,
                        });
                    }
                    current.expected_part2 = Some(value.trim().to_string());
                } else if let Some((key, value)) = line.split_once('=') {
                    apply_option(&mut current, &mut ignore_seen, key.trim(), value.trim(), line_no)?;
                } else {
                    return Err(FixtureError::MalformedExpectedLine {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
            }
        }
    }

    match state {
        State::Expected => {
            cases.push(current);
            Ok(Fixture { cases })
        }
        // Reaching EOF in the input state means either a clean empty file,
        // a case missing its expected block, or a trailing separator.
        State::Input if case_started || !cases.is_empty() => Err(FixtureError::UnexpectedEof {
            line: last_line,
            marker: EXPECTED_MARKER,
        }),
        State::Input => Ok(Fixture { cases }),
    }
}

/// Apply one `key=value` option line to the current case
fn apply_option(
    case: &mut TestCase,
    ignore_seen: &mut bool,
    key: &str,
    value: &str,
    line: usize,
) -> Result<(), FixtureError> {
    match key {
        "part" => {
            if case.options.part.is_some() {
                return Err(FixtureError::DuplicateOption {
                    line,
                    key: key.to_string(),
                });
            }
            let part: u8 = value.parse().map_err(|_| invalid(line, key, value, "expected a small integer"))?;
            if !(1..=2).contains(&part) {
                return Err(invalid(line, key, value, "part must be 1 or 2"));
            }
            case.options.part = Some(part);
        }
        "ignore" => {
            if *ignore_seen {
                return Err(FixtureError::DuplicateOption {
                    line,
                    key: key.to_string(),
                });
            }
            case.options.ignore = value
                .parse()
                .map_err(|_| invalid(line, key, value, "expected `true` or `false`"))?;
            *ignore_seen = true;
        }
        "long" => {
            if case.options.long.is_some() {
                return Err(FixtureError::DuplicateOption {
                    line,
                    key: key.to_string(),
                });
            }
            let duration = humantime::parse_duration(value)
                .map_err(|e| invalid(line, key, value, &e.to_string()))?;
            case.options.long = Some(duration);
        }
        _ => {
            return Err(FixtureError::UnknownOption {
                line,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn invalid(line: usize, key: &str, value: &str, message: &str) -> FixtureError {
    FixtureError::InvalidOptionValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn single_case_with_one_expected() {
        let fixture = parse("3 4 5\n===\npart1: 1\n").unwrap();
        assert_eq!(fixture.cases.len(), 1);
        let case = &fixture.cases[0];
        assert_eq!(case.input, vec!["3 4 5"]);
        assert_eq!(case.expected_part1.as_deref(), Some("1"));
        assert_eq!(case.expected_part2, None);
    }

    #[test]
    fn multiple_cases_preserve_order() {
        let fixture = parse("a\n===\npart1: 1\n---\nb\nc\n===\npart2: 2\n").unwrap();
        assert_eq!(fixture.cases.len(), 2);
        assert_eq!(fixture.cases[0].input, vec!["a"]);
        assert_eq!(fixture.cases[1].input, vec!["b", "c"]);
        assert_eq!(fixture.cases[1].expected_part2.as_deref(), Some("2"));
    }

    #[test]
    fn options_are_parsed() {
        let fixture = parse("x\n===\npart1: 9\npart=1\nignore=true\nlong=30s\n").unwrap();
        let opts = &fixture.cases[0].options;
        assert_eq!(opts.part, Some(1));
        assert!(opts.ignore);
        assert_eq!(opts.long, Some(Duration::from_secs(30)));
    }

    #[test]
    fn empty_expected_block_is_a_benchmark_only_case() {
        let fixture = parse("input only\n===\n").unwrap();
        let case = &fixture.cases[0];
        assert_eq!(case.expected_part1, None);
        assert_eq!(case.expected_part2, None);
    }

    #[test]
    fn empty_input_block_is_allowed() {
        let fixture = parse("===\npart1: 0\n").unwrap();
        assert!(fixture.cases[0].input.is_empty());
    }

    #[test]
    fn empty_file_yields_empty_fixture() {
        assert_eq!(parse("").unwrap().cases.len(), 0);
    }

    #[test]
    fn blank_input_lines_are_verbatim() {
        let fixture = parse("a\n\nb\n===\npart1: 1\n").unwrap();
        assert_eq!(fixture.cases[0].input, vec!["a", "", "b"]);
    }

    #[test]
    fn separator_before_marker_is_an_error() {
        let err = parse("input\n---\n").unwrap_err();
        assert_eq!(err, FixtureError::SeparatorBeforeExpected { line: 2 });
    }

    #[test]
    fn eof_mid_case_is_an_error() {
        let err = parse("line one\nline two\n").unwrap_err();
        assert!(matches!(err, FixtureError::UnexpectedEof { line: 2, .. }));
    }

    #[test]
    fn trailing_separator_is_an_error() {
        let err = parse("a\n===\npart1: 1\n---\n").unwrap_err();
        assert!(matches!(err, FixtureError::UnexpectedEof { line: 4, .. }));
    }

    #[test]
    fn duplicate_expected_value_is_an_error() {
        let err = parse("a\n===\npart1: 1\npart1: 2\n").unwrap_err();
        assert_eq!(err, FixtureError::DuplicateExpected { line: 4, part: 1 });
    }

    #[test]
    fn unknown_option_key_is_an_error() {
        let err = parse("a\n===\ntimeout=5s\n").unwrap_err();
        assert_eq!(
            err,
            FixtureError::UnknownOption {
                line: 3,
                key: "timeout".to_string()
            }
        );
    }

    #[test]
    fn duplicate_option_is_an_error() {
        let err = parse("a\n===\nignore=true\nignore=false\n").unwrap_err();
        assert_eq!(
            err,
            FixtureError::DuplicateOption {
                line: 4,
                key: "ignore".to_string()
            }
        );
    }

    #[test]
    fn non_boolean_ignore_is_an_error() {
        let err = parse("a\n===\nignore=yes\n").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidOptionValue { line: 3, .. }));
    }

    #[test]
    fn non_duration_long_is_an_error() {
        let err = parse("a\n===\nlong=fast\n").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidOptionValue { line: 3, .. }));
    }

    #[test]
    fn out_of_range_part_is_an_error() {
        let err = parse("a\n===\npart=3\n").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidOptionValue { line: 3, .. }));
    }

    #[test]
    fn malformed_expected_line_is_an_error() {
        let err = parse("a\n===\nnot an option\n").unwrap_err();
        assert!(matches!(err, FixtureError::MalformedExpectedLine { line: 3, .. }));
    }

    #[test]
    fn round_trip_preserves_records() {
        let text = "3 4 5\n===\npart1: 1\n---\nabc\n\ndef\n===\npart1: 7\npart2: 8\npart=2\nlong=2m 30s\n";
        let fixture = parse(text).unwrap();
        let reparsed = parse(&fixture.to_fixture_string()).unwrap();
        assert_eq!(fixture, reparsed);
    }

    #[test]
    fn reparsing_identical_bytes_is_deterministic() {
        let text = "a\n===\npart1: 1\nignore=false\n";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }
}
