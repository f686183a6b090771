//! Matching parsed selection expressions against test cases.
//!
//! Matching is a pure read over the case record: no allocation, no state.
//! Name comparisons are case-sensitive; tag comparisons are
//! case-insensitive (both the case's tags and tag pattern text are stored
//! lowercased at construction).

use crate::case::TestCaseInfo;

use super::ast::{Clause, Pattern, PatternKind, TestSpec};

impl Pattern {
    /// Tests the pattern against a case, honouring negation.
    pub fn matches(&self, case: &TestCaseInfo) -> bool {
        let hit = match &self.kind {
            PatternKind::Name {
                text,
                anchor_start,
                anchor_end,
            } => match (anchor_start, anchor_end) {
                (true, true) => case.name.contains(text.as_str()),
                (true, false) => case.name.ends_with(text.as_str()),
                (false, true) => case.name.starts_with(text.as_str()),
                (false, false) => case.name == *text,
            },
            PatternKind::Tag { text } => case.tags.iter().any(|t| t == text),
        };
        hit != self.negated
    }
}

impl Clause {
    /// True when every pattern in the clause matches the case.
    pub fn matches(&self, case: &TestCaseInfo) -> bool {
        self.patterns.iter().all(|p| p.matches(case))
    }
}

impl TestSpec {
    /// True when any clause matches the case.
    ///
    /// A spec with no filters matches nothing.
    pub fn matches(&self, case: &TestCaseInfo) -> bool {
        self.clauses.iter().any(|c| c.matches(case))
    }
}
