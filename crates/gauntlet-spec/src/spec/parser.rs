//! Character-level parser for selection strings.

use super::ast::{Clause, Pattern, TestSpec};

/// Token prefix that negates the pattern it precedes, spelled out.
const EXCLUDE_PREFIX: &str = "exclude:";

/// What the current run of characters is part of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Between tokens.
    None,
    /// Inside a bare name token.
    Name,
    /// Inside a `"…"` quoted name token.
    QuotedName,
    /// Inside a `[…]` tag token.
    Tag,
}

/// Parser for selection strings.
///
/// The parser is an accumulator: each [`parse`](SpecParser::parse) call adds
/// the string's clauses to the spec under construction, so several
/// command-line arguments can be folded into one [`TestSpec`]. Parsing is
/// total — there is no error channel, and degenerate input simply
/// contributes no clauses.
///
/// # Example
///
/// ```
/// use gauntlet_spec_rs::{SpecParser, TestCaseInfo};
///
/// let mut parser = SpecParser::new();
/// parser.parse("[net]");
/// parser.parse("update*");
/// let spec = parser.into_spec();
///
/// assert!(spec.matches(&TestCaseInfo::new("connect", "[net]")));
/// assert!(spec.matches(&TestCaseInfo::new("update index", "")));
/// assert!(!spec.matches(&TestCaseInfo::new("shutdown", "")));
/// ```
#[derive(Debug, Default)]
pub struct SpecParser {
    spec: TestSpec,
}

impl SpecParser {
    /// Creates a parser with an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one selection string, accumulating its clauses.
    pub fn parse(&mut self, text: &str) {
        let mut run = ParseRun::new();
        for c in text.chars() {
            run.visit(c);
        }
        run.finish(&mut self.spec);
    }

    /// Consumes the parser, returning the accumulated spec.
    pub fn into_spec(self) -> TestSpec {
        self.spec
    }
}

/// Parses a single selection string into a spec.
pub fn parse_test_spec(text: &str) -> TestSpec {
    let mut parser = SpecParser::new();
    parser.parse(text);
    parser.into_spec()
}

/// State for one `parse` call: the mode machine, the token buffer, the
/// pending negation flag and the clauses built so far.
struct ParseRun {
    mode: Mode,
    token: String,
    negated: bool,
    clause: Clause,
    clauses: Vec<Clause>,
}

impl ParseRun {
    fn new() -> Self {
        Self {
            mode: Mode::None,
            token: String::new(),
            negated: false,
            clause: Clause::new(),
            clauses: Vec::new(),
        }
    }

    fn visit(&mut self, c: char) {
        match self.mode {
            Mode::None => match c {
                c if c.is_whitespace() => {}
                ',' => self.end_clause(),
                '~' => self.negated = true,
                '[' => self.mode = Mode::Tag,
                '"' => self.mode = Mode::QuotedName,
                _ => {
                    self.mode = Mode::Name;
                    self.token.push(c);
                }
            },
            Mode::Name => match c {
                ',' => {
                    self.add_bare_name();
                    self.end_clause();
                }
                '[' => {
                    // "exclude:[tag]" negates the tag rather than naming a
                    // case "exclude:".
                    if self.token == EXCLUDE_PREFIX {
                        self.negated = true;
                        self.token.clear();
                    } else {
                        self.add_bare_name();
                    }
                    self.mode = Mode::Tag;
                }
                _ => self.token.push(c),
            },
            Mode::QuotedName => {
                if c == '"' {
                    let token = std::mem::take(&mut self.token);
                    self.add_pattern(Pattern::name(&token));
                    self.mode = Mode::None;
                } else {
                    self.token.push(c);
                }
            }
            Mode::Tag => {
                if c == ']' {
                    let token = std::mem::take(&mut self.token);
                    self.add_pattern(Pattern::tag(&token));
                    self.mode = Mode::None;
                } else {
                    self.token.push(c);
                }
            }
        }
    }

    /// Flushes a pending bare name and the final clause into the spec.
    /// An unterminated quote or tag is discarded.
    fn finish(mut self, spec: &mut TestSpec) {
        if self.mode == Mode::Name {
            self.add_bare_name();
        }
        self.end_clause();
        for clause in self.clauses {
            spec.push_clause(clause);
        }
    }

    /// Adds a name pattern from the bare-token buffer, resolving the
    /// `exclude:` prefix and trimming whitespace around the name.
    fn add_bare_name(&mut self) {
        let token = std::mem::take(&mut self.token);
        let mut token = token.trim();
        if let Some(rest) = token.strip_prefix(EXCLUDE_PREFIX) {
            self.negated = true;
            token = rest;
        }
        self.add_pattern(Pattern::name(token));
        self.mode = Mode::None;
    }

    /// Adds a pattern to the current clause, consuming the pending negation.
    /// The negation is consumed even when the token produced no pattern, so
    /// a dangling `~` cannot leak onto a later token.
    fn add_pattern(&mut self, pattern: Option<Pattern>) {
        if let Some(pattern) = pattern {
            let pattern = if self.negated {
                pattern.negate()
            } else {
                pattern
            };
            self.clause.push(pattern);
        }
        self.negated = false;
    }

    /// Closes the current clause; clauses that accumulated no patterns are
    /// discarded. A negation still pending at the boundary dies with the
    /// clause.
    fn end_clause(&mut self) {
        if !self.clause.is_empty() {
            self.clauses.push(std::mem::take(&mut self.clause));
        }
        self.negated = false;
        self.mode = Mode::None;
    }
}
