//! The gauntlet option surface.
//!
//! One declarative table, built once at startup. Every descriptor binds
//! into [`RunConfig`]; the schema itself never changes after this function
//! returns.

use gauntlet_cmdline_rs::OptionSchema;

use crate::config::RunConfig;

/// Builds the option schema for the gauntlet command line.
pub fn build_schema() -> OptionSchema<RunConfig> {
    OptionSchema::new()
        .exe_name(|c: &mut RunConfig, name| c.process_name = name.to_string())
        .positional("<test spec>", |c, token| {
            c.tests_or_tags.push(token.to_string());
        })
        .flag(Some('h'), "help", "print this usage screen", |c| {
            c.show_help = true;
        })
        .flag(Some('l'), "list-tests", "list the selected cases", |c| {
            c.list_tests = true;
        })
        .flag(
            Some('t'),
            "list-tags",
            "list the tags of the selected cases, with counts",
            |c| c.list_tags = true,
        )
        .flag(
            Some('b'),
            "break",
            "break into the debugger when a case fails",
            |c| c.should_debug_break = true,
        )
        .flag(Some('e'), "nothrow", "skip exception expectations", |c| {
            c.no_throw = true;
        })
        .flag(Some('a'), "abort", "abort at the first failure", |c| {
            c.abort_after = 1;
        })
        .value(
            Some('x'),
            "abortx",
            "<count>",
            "abort after <count> failures",
            |c, raw| {
                c.abort_after = raw
                    .parse()
                    .map_err(|_| format!("unable to convert '{raw}' to a failure count"))?;
                Ok(())
            },
        )
        .value(
            Some('o'),
            "out",
            "<filename>",
            "write rendered output to a file",
            |c, raw| {
                c.output_filename = Some(raw.to_string());
                Ok(())
            },
        )
        .value(
            Some('i'),
            "input",
            "<filename>",
            "load the case manifest from a JSON file",
            |c, raw| {
                c.input_manifest = Some(raw.to_string());
                Ok(())
            },
        )
        .value(
            Some('r'),
            "reporter",
            "<name>",
            "add a reporter (console, json); may be repeated",
            |c, raw| {
                c.reporter_names.push(raw.to_string());
                Ok(())
            },
        )
        .value(
            None,
            "use-colour",
            "<mode>",
            "colourise console output (auto, yes, no)",
            |c, raw| {
                c.use_colour = raw.parse()?;
                Ok(())
            },
        )
}
