//! Selection expression parsing and matching.
//!
//! A selection string picks a subset of registered test cases by display
//! name or tag. Comma-separated segments are alternatives (OR); adjacent
//! tokens within a segment must all hold (AND).
//!
//! # Syntax
//!
//! ```text
//! name           Exact name match
//! name*          Name prefix match
//! *name          Name suffix match
//! *name*         Name substring match
//! "name"         Quoted name; commas, brackets and spaces lose their
//!                meaning inside, wildcards do not
//! [tag]          Tag match
//! ~token         Negate the next token
//! exclude:token  Same as ~token
//! a,b            Either a or b
//! ```
//!
//! # Examples
//!
//! ```text
//! [net]                    # every case tagged [net]
//! [net][slow]              # cases tagged both [net] and [slow]
//! update*,[db]             # names starting "update", plus [db] cases
//! ~[slow]*sync*            # "sync" cases that are not tagged [slow]
//! exclude:[flaky]          # everything without the [flaky] tag
//! ```
//!
//! Parsing is total: degenerate input (an empty string, a lone comma, `[]`,
//! `""`) yields a spec with no filters, which matches nothing.

mod ast;
mod matcher;
mod parser;

pub use ast::{Clause, Pattern, PatternKind, TestSpec};
pub use parser::{parse_test_spec, SpecParser};
