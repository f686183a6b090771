//! Settings file support.
//!
//! Defaults that would otherwise be repeated on every invocation live in
//! `gauntlet.toml` under the platform config directory (XDG-style
//! `~/.config/gauntlet/`). The `GAUNTLET_CONFIG` environment variable
//! overrides the path, which the tests rely on. A missing file is not an
//! error; the command line always wins over the file.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::error::{CommandError, Result};

/// Current settings schema version. Increment on breaking changes.
const SETTINGS_VERSION: u32 = 1;

/// Settings file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Settings schema version for migrations.
    /// Defaults to the current version when not present in the file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Returns the current settings version (used by serde default).
fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            output: OutputSettings::default(),
        }
    }
}

/// Output defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Default colour mode: "auto", "yes" or "no".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,

    /// Default reporters, used when the command line names none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporters: Option<Vec<String>>,
}

impl Settings {
    /// Applies defaults that the command line may overwrite.
    ///
    /// Called before the argument scan, so an explicit `--use-colour` wins.
    pub fn prime(&self, config: &mut RunConfig) -> Result<()> {
        if let Some(mode) = &self.output.colour {
            config.use_colour = mode
                .parse()
                .map_err(|message: String| CommandError::Settings { message })?;
        }
        Ok(())
    }

    /// Fills gaps the command line left open.
    ///
    /// Called after the argument scan: reporters are a repeatable option,
    /// so the file's list only applies when none were named.
    pub fn backfill(&self, config: &mut RunConfig) {
        if config.reporter_names.is_empty() {
            if let Some(reporters) = &self.output.reporters {
                config.reporter_names = reporters.clone();
            }
        }
    }
}

/// Resolves the settings file path.
///
/// `GAUNTLET_CONFIG` takes priority; otherwise the platform config
/// directory. `None` when neither is available.
fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("GAUNTLET_CONFIG") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("gauntlet").join("gauntlet.toml"))
}

/// Loads the settings file, or the defaults when there is none.
pub fn load_settings() -> Result<Settings> {
    let Some(path) = settings_path() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(&path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UseColour;
    use serial_test::serial;
    use std::io::Write;

    /// Runs `f` with GAUNTLET_CONFIG pointing at `contents`, restoring the
    /// variable afterwards.
    fn with_settings_file(contents: &str, f: impl FnOnce()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gauntlet.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();

        let original = env::var("GAUNTLET_CONFIG").ok();
        env::set_var("GAUNTLET_CONFIG", path.to_str().unwrap());

        f();

        match original {
            Some(val) => env::set_var("GAUNTLET_CONFIG", val),
            None => env::remove_var("GAUNTLET_CONFIG"),
        }
    }

    #[test]
    #[serial]
    fn test_missing_file_yields_defaults() {
        let original = env::var("GAUNTLET_CONFIG").ok();
        env::set_var("GAUNTLET_CONFIG", "/tmp/gauntlet-test-nonexistent/gauntlet.toml");

        let settings = load_settings().unwrap();

        match original {
            Some(val) => env::set_var("GAUNTLET_CONFIG", val),
            None => env::remove_var("GAUNTLET_CONFIG"),
        }

        assert_eq!(settings.version, SETTINGS_VERSION);
        assert!(settings.output.colour.is_none());
        assert!(settings.output.reporters.is_none());
    }

    #[test]
    #[serial]
    fn test_loads_output_defaults() {
        let contents = r#"
            version = 1

            [output]
            colour = "no"
            reporters = ["json"]
        "#;
        with_settings_file(contents, || {
            let settings = load_settings().unwrap();
            assert_eq!(settings.output.colour.as_deref(), Some("no"));

            let mut config = RunConfig::default();
            settings.prime(&mut config).unwrap();
            settings.backfill(&mut config);
            assert_eq!(config.use_colour, UseColour::No);
            assert_eq!(config.reporter_names, vec!["json"]);
        });
    }

    #[test]
    #[serial]
    fn test_command_line_reporters_win_over_the_file() {
        let contents = r#"
            [output]
            reporters = ["json"]
        "#;
        with_settings_file(contents, || {
            let settings = load_settings().unwrap();
            let mut config = RunConfig {
                reporter_names: vec!["console".to_string()],
                ..RunConfig::default()
            };
            settings.backfill(&mut config);
            assert_eq!(config.reporter_names, vec!["console"]);
        });
    }

    #[test]
    #[serial]
    fn test_invalid_colour_mode_is_a_settings_error() {
        let contents = r#"
            [output]
            colour = "sometimes"
        "#;
        with_settings_file(contents, || {
            let settings = load_settings().unwrap();
            let mut config = RunConfig::default();
            let err = settings.prime(&mut config).unwrap_err();
            assert!(err.to_string().contains("must be one of"));
        });
    }

    #[test]
    #[serial]
    fn test_unparseable_file_is_an_error() {
        with_settings_file("not toml at all [", || {
            assert!(load_settings().is_err());
        });
    }
}
