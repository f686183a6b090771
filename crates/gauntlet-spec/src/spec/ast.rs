//! Parsed form of a selection expression.
//!
//! A selection string parses into two nested ordered containers rather than
//! a general expression tree: a [`TestSpec`] is a disjunction of
//! [`Clause`]s, and a clause is a conjunction of [`Pattern`]s. All three are
//! immutable value objects once parsing has finished.

/// A single match test against one aspect of a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Matches against the case's display name, case-sensitively.
    ///
    /// The anchors record where wildcard markers appeared in the source
    /// token: a leading `*` (`anchor_start`) turns the test into a suffix
    /// match, a trailing `*` (`anchor_end`) into a prefix match, both into
    /// a substring match, neither into exact equality.
    Name {
        /// The literal text with wildcard markers stripped.
        text: String,
        /// A wildcard preceded the text.
        anchor_start: bool,
        /// A wildcard followed the text.
        anchor_end: bool,
    },

    /// Matches when the case carries the tag, case-insensitively.
    Tag {
        /// The tag text, lowercased.
        text: String,
    },
}

/// One pattern of a clause: a [`PatternKind`] plus optional negation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(super) kind: PatternKind,
    pub(super) negated: bool,
}

impl Pattern {
    /// Creates a name pattern from a raw token, resolving wildcard markers.
    ///
    /// Returns `None` for an empty token (an empty quoted string produces
    /// no pattern).
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet_spec_rs::spec::{Pattern, PatternKind};
    ///
    /// let pattern = Pattern::name("update*").unwrap();
    /// assert!(matches!(
    ///     pattern.kind(),
    ///     PatternKind::Name { anchor_start: false, anchor_end: true, .. }
    /// ));
    /// ```
    pub fn name(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let anchor_start = raw.starts_with('*');
        let rest = if anchor_start { &raw[1..] } else { raw };
        let anchor_end = rest.ends_with('*');
        let text = if anchor_end {
            &rest[..rest.len() - 1]
        } else {
            rest
        };

        Some(Pattern {
            kind: PatternKind::Name {
                text: text.to_string(),
                anchor_start,
                anchor_end,
            },
            negated: false,
        })
    }

    /// Creates a tag pattern. Returns `None` for an empty tag (`[]`).
    pub fn tag(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Pattern {
            kind: PatternKind::Tag {
                text: text.to_lowercase(),
            },
            negated: false,
        })
    }

    /// Marks the pattern as negated: it matches where the inner test fails.
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    /// The pattern's match test.
    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Whether the pattern's result is inverted.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// A conjunction of patterns: one comma-delimited segment of a selection
/// string. A clause with no patterns never matches and is never added to a
/// spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    pub(super) patterns: Vec<Pattern>,
}

impl Clause {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// The patterns in source order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub(super) fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A disjunction of clauses: the parsed, matchable form of one or more
/// selection strings.
///
/// An empty spec has no filters and matches no case at all; callers that
/// want "no filter means everything" check [`TestSpec::has_filters`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSpec {
    pub(super) clauses: Vec<Clause>,
}

impl TestSpec {
    /// True when at least one clause with at least one pattern was parsed.
    pub fn has_filters(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// The clauses in source order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub(super) fn push_clause(&mut self, clause: Clause) {
        debug_assert!(!clause.is_empty());
        self.clauses.push(clause);
    }
}
