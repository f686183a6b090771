//! Schema-driven command line option parsing.
//!
//! The host declares its options once as an [`OptionSchema`] over its own
//! configuration record: each descriptor carries the option's spellings, a
//! help line, and a binding closure that writes the parsed value into the
//! record. [`OptionParser`] then consumes an argv-style token sequence in a
//! single left-to-right scan, applying each recognized option and handing
//! everything else to the schema's positional binding.
//!
//! Failures are ordinary values ([`ParseError`]) with stable, test-friendly
//! message fragments; the scan stops at the first error and options applied
//! before it remain applied.
//!
//! # Example
//!
//! ```
//! use gauntlet_cmdline_rs::{OptionParser, OptionSchema};
//!
//! #[derive(Default)]
//! struct Config {
//!     exe: String,
//!     verbose: bool,
//!     jobs: usize,
//! }
//!
//! let schema = OptionSchema::new()
//!     .exe_name(|c: &mut Config, name| c.exe = name.to_string())
//!     .flag(Some('v'), "verbose", "print progress while running", |c| {
//!         c.verbose = true;
//!     })
//!     .value(Some('j'), "jobs", "<count>", "worker thread count", |c, raw| {
//!         c.jobs = raw
//!             .parse()
//!             .map_err(|_| format!("unable to convert '{raw}' to a count"))?;
//!         Ok(())
//!     });
//!
//! let mut config = Config::default();
//! OptionParser::new(&schema)
//!     .parse(&mut config, ["demo", "-v", "--jobs", "4"])
//!     .unwrap();
//! assert_eq!(config.exe, "demo");
//! assert!(config.verbose);
//! assert_eq!(config.jobs, 4);
//! ```

pub mod error;
pub mod parser;
pub mod schema;

pub use error::{ParseError, ParseResult};
pub use parser::OptionParser;
pub use schema::OptionSchema;
