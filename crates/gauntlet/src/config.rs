//! Run configuration: the record the command line binds into, and the
//! selection state derived from it once parsing has finished.

use std::io::IsTerminal;
use std::str::FromStr;

use gauntlet_spec_rs::{SpecParser, TestCaseInfo, TestSpec};

/// Reporter used when the command line and settings name none.
pub const DEFAULT_REPORTER: &str = "console";

/// Colour policy for console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UseColour {
    /// Colourise when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always colourise.
    Yes,
    /// Never colourise.
    No,
}

impl FromStr for UseColour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(UseColour::Auto),
            "yes" => Ok(UseColour::Yes),
            "no" => Ok(UseColour::No),
            _ => Err(format!(
                "colour mode must be one of 'auto', 'yes' or 'no'; '{s}' is not recognised"
            )),
        }
    }
}

/// The mutable record the option schema binds into.
///
/// One field per option, plus the process name and the raw test-selection
/// strings collected from positional arguments. Fields hold their
/// documented defaults until an option overwrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// The invoking process's identifier (argv\[0\], verbatim).
    pub process_name: String,

    /// Raw selection strings, in command line order.
    pub tests_or_tags: Vec<String>,

    /// Print the usage screen and exit.
    pub show_help: bool,

    /// List the selected case names.
    pub list_tests: bool,

    /// List the tags of the selected cases, with counts.
    pub list_tags: bool,

    /// Break into the debugger when a case fails.
    pub should_debug_break: bool,

    /// Skip exception expectations.
    pub no_throw: bool,

    /// Abort after this many failures; -1 means never.
    pub abort_after: i32,

    /// Case manifest to load instead of the built-in sample set.
    pub input_manifest: Option<String>,

    /// Write rendered output here instead of stdout.
    pub output_filename: Option<String>,

    /// Reporters to render with, in command line order.
    pub reporter_names: Vec<String>,

    /// Console colour policy.
    pub use_colour: UseColour,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            process_name: String::new(),
            tests_or_tags: Vec::new(),
            show_help: false,
            list_tests: false,
            list_tags: false,
            should_debug_break: false,
            no_throw: false,
            abort_after: -1,
            input_manifest: None,
            output_filename: None,
            reporter_names: Vec::new(),
            use_colour: UseColour::Auto,
        }
    }
}

/// A finished configuration: the raw record plus the test spec folded from
/// its selection strings. Built once after parsing; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    data: RunConfig,
    test_spec: TestSpec,
}

impl Config {
    /// Derives the selection state from a parsed record.
    pub fn new(data: RunConfig) -> Self {
        let mut parser = SpecParser::new();
        for text in &data.tests_or_tags {
            parser.parse(text);
        }
        Self {
            test_spec: parser.into_spec(),
            data,
        }
    }

    /// The underlying record.
    pub fn data(&self) -> &RunConfig {
        &self.data
    }

    /// True when the command line named at least one selection filter.
    pub fn has_test_filters(&self) -> bool {
        self.test_spec.has_filters()
    }

    /// The spec folded from every selection string.
    pub fn test_spec(&self) -> &TestSpec {
        &self.test_spec
    }

    /// Default selection policy: with no filters every non-hidden case is
    /// selected; with filters, exactly the matching cases — hidden ones
    /// included when a filter matches them.
    pub fn should_run(&self, case: &TestCaseInfo) -> bool {
        if self.has_test_filters() {
            self.test_spec.matches(case)
        } else {
            !case.hidden
        }
    }

    /// The reporter to render with: the first named one, else the default.
    pub fn reporter(&self) -> &str {
        self.data
            .reporter_names
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_REPORTER)
    }

    /// Resolves the colour policy against the environment.
    pub fn colour_enabled(&self) -> bool {
        match self.data.use_colour {
            UseColour::Yes => true,
            UseColour::No => false,
            UseColour::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}
