//! Test case selection for the gauntlet test harness.
//!
//! This crate provides the read-only test case record ([`TestCaseInfo`]) and
//! the selection language used to pick a subset of registered cases by name
//! or tag ([`spec`]). Parsing a selection string yields a [`TestSpec`] that
//! can be matched against any number of cases without further allocation.

pub mod case;
pub mod spec;

pub use case::TestCaseInfo;
pub use spec::{parse_test_spec, SpecParser, TestSpec};
