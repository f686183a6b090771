use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use gauntlet_cmdline_rs::OptionParser;
use gauntlet_spec_rs::TestCaseInfo;

use gauntlet_cli_rs::cli::build_schema;
use gauntlet_cli_rs::config::{Config, RunConfig};
use gauntlet_cli_rs::error::{CommandError, Result};
use gauntlet_cli_rs::manifest::{load_cases, sample_cases};
use gauntlet_cli_rs::output::{self, Listing};
use gauntlet_cli_rs::settings::load_settings;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            error_exit_code(&e)
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let settings = load_settings()?;

    let mut data = RunConfig::default();
    settings.prime(&mut data)?;

    let schema = build_schema();
    OptionParser::new(&schema).parse(&mut data, args)?;

    if data.show_help {
        let process_name = if data.process_name.is_empty() {
            "gauntlet"
        } else {
            &data.process_name
        };
        println!("{}", schema.usage(process_name));
        return Ok(());
    }

    settings.backfill(&mut data);
    let config = Config::new(data);

    let all_cases = match &config.data().input_manifest {
        Some(path) => load_cases(Path::new(path))?,
        None => sample_cases(),
    };
    let selected: Vec<&TestCaseInfo> = all_cases.iter().filter(|c| config.should_run(c)).collect();

    let listing = if config.data().list_tags {
        Listing::Tags
    } else {
        Listing::Tests
    };

    match &config.data().output_filename {
        Some(path) => {
            let mut file = File::create(path)?;
            output::render(&config, listing, &selected, &mut file)
        }
        None => {
            let stdout = io::stdout();
            output::render(&config, listing, &selected, &mut stdout.lock())
        }
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::CmdLine(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Settings { .. } | CommandError::SettingsFile(_) => ExitCode::from(5),
        CommandError::Json(_) | CommandError::UnknownReporter { .. } => ExitCode::from(1),
    }
}
