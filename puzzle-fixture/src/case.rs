//! Fixture data model: test cases, per-case options, and the fixture itself

use crate::parse::{CASE_SEPARATOR, EXPECTED_MARKER};
use std::time::Duration;

/// Per-case configuration, declared as `key=value` lines in the fixture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseOptions {
    /// Restrict this case to one part; `None` runs whichever parts have an
    /// expected value
    pub part: Option<u8>,
    /// Parsed but never executed or counted toward pass/fail
    pub ignore: bool,
    /// Cost estimate for this case, gated against the configured long-test
    /// budget before execution
    pub long: Option<Duration>,
}

/// One unit of verification: an input block, expected outputs, and options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    /// Ordered verbatim puzzle-input lines
    pub input: Vec<String>,
    /// Expected textual result for part 1; absence means part 1 is not
    /// exercised by this case
    pub expected_part1: Option<String>,
    /// Expected textual result for part 2
    pub expected_part2: Option<String>,
    /// Per-case options
    pub options: CaseOptions,
}

impl TestCase {
    /// The input block joined into the single string solvers consume
    pub fn input_text(&self) -> String {
        self.input.join("\n")
    }

    /// Expected value for a part, if the case exercises it
    pub fn expected(&self, part: u8) -> Option<&str> {
        match part {
            1 => self.expected_part1.as_deref(),
            2 => self.expected_part2.as_deref(),
            _ => None,
        }
    }

    /// Whether this case declares and expects the given part.
    ///
    /// True when an expected value is present and the `part` option (when
    /// set) names this part. A run-time part filter can only restrict this
    /// set further, never expand it.
    pub fn declares_part(&self, part: u8) -> bool {
        self.expected(part).is_some() && self.options.part.is_none_or(|p| p == part)
    }
}

/// An ordered sequence of test cases parsed from one fixture file
///
/// Case order is semantically significant: the position in `cases` is the
/// index used by executor diagnostics and by benchmark case selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub cases: Vec<TestCase>,
}

impl Fixture {
    /// Runnable cases with their original fixture indices.
    ///
    /// A case is runnable iff it is not ignored. Both the test executor and
    /// the benchmark adapter derive their case sets from this iterator, so
    /// the two consumers cannot disagree about how many runnable cases
    /// exist.
    pub fn runnable(&self) -> impl Iterator<Item = (usize, &TestCase)> {
        self.cases
            .iter()
            .enumerate()
            .filter(|(_, case)| !case.options.ignore)
    }

    /// Serialize back to the canonical fixture format.
    ///
    /// Parsing the returned string yields a `Fixture` equal to `self`
    /// (the round-trip property).
    pub fn to_fixture_string(&self) -> String {
        let mut out = String::new();
        for (idx, case) in self.cases.iter().enumerate() {
            if idx > 0 {
                out.push_str(CASE_SEPARATOR);
                out.push('\n');
            }
            for line in &case.input {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(EXPECTED_MARKER);
            out.push('\n');
            if let Some(v) = &case.expected_part1 {
                out.push_str("part1: ");
                out.push_str(v);
                out.push('\n');
            }
            if let Some(v) = &case.expected_part2 {
                out.push_str("part2: ");
                out.push_str(v);
                out.push('\n');
            }
            if let Some(part) = case.options.part {
                out.push_str(&format!("part={part}\n"));
            }
            if case.options.ignore {
                out.push_str("ignore=true\n");
            }
            if let Some(long) = case.options.long {
                out.push_str(&format!("long={}\n", humantime::format_duration(long)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(input: &[&str], p1: Option<&str>, p2: Option<&str>) -> TestCase {
        TestCase {
            input: input.iter().map(|s| s.to_string()).collect(),
            expected_part1: p1.map(String::from),
            expected_part2: p2.map(String::from),
            options: CaseOptions::default(),
        }
    }

    #[test]
    fn declares_part_requires_expected_value() {
        let c = case(&["3 4 5"], Some("1"), None);
        assert!(c.declares_part(1));
        assert!(!c.declares_part(2));
    }

    #[test]
    fn part_option_restricts_declared_parts() {
        let mut c = case(&["x"], Some("1"), Some("2"));
        c.options.part = Some(2);
        assert!(!c.declares_part(1));
        assert!(c.declares_part(2));
    }

    #[test]
    fn runnable_skips_ignored_cases() {
        let mut ignored = case(&["a"], Some("1"), None);
        ignored.options.ignore = true;
        let fixture = Fixture {
            cases: vec![case(&["b"], Some("2"), None), ignored, case(&["c"], None, Some("3"))],
        };
        let indices: Vec<usize> = fixture.runnable().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn serialize_emits_canonical_form() {
        let mut c = case(&["1122"], Some("3"), None);
        c.options.long = Some(Duration::from_secs(30));
        let fixture = Fixture { cases: vec![c] };
        assert_eq!(
            fixture.to_fixture_string(),
            "1122\n===\npart1: 3\nlong=30s\n"
        );
    }
}
