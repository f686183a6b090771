//! Error plumbing for the gauntlet binary.

use thiserror::Error;

/// A specialized Result type for gauntlet commands.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Everything that can go wrong between argv and rendered output.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command line did not parse.
    #[error("{0}")]
    CmdLine(#[from] gauntlet_cmdline_rs::ParseError),

    /// A reporter name matched no known reporter.
    #[error("unknown reporter '{name}' (known reporters: console, json)")]
    UnknownReporter {
        /// The requested reporter name.
        name: String,
    },

    /// The settings file exists but holds an invalid value.
    #[error("invalid settings: {message}")]
    Settings {
        /// What was wrong with it.
        message: String,
    },

    /// The settings file or manifest could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file was not valid TOML.
    #[error("invalid settings file: {0}")]
    SettingsFile(#[from] toml::de::Error),
}
