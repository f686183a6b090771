//! The `gauntlet` selection preview tool.
//!
//! Wires the two engines together: the command line is parsed through
//! [`cli::build_schema`] into a [`config::RunConfig`], the positional
//! arguments become a test spec via [`config::Config`], and the selected
//! cases from the manifest are rendered by a reporter.

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod settings;

pub use config::{Config, RunConfig, UseColour};
pub use error::{CommandError, Result};
