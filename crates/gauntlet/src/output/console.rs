//! Human-readable console reporter.

use std::io::Write;

use owo_colors::OwoColorize;

use gauntlet_spec_rs::TestCaseInfo;

use crate::config::Config;
use crate::error::Result;
use crate::output::{tag_counts, Listing};

pub(super) fn render(
    config: &Config,
    listing: Listing,
    cases: &[&TestCaseInfo],
    out: &mut dyn Write,
) -> Result<()> {
    match listing {
        Listing::Tests => render_tests(config, cases, out),
        Listing::Tags => render_tags(config, cases, out),
    }
}

fn render_tests(config: &Config, cases: &[&TestCaseInfo], out: &mut dyn Write) -> Result<()> {
    let colour = config.colour_enabled();

    writeln!(out, "Matching test cases:")?;
    for case in cases {
        writeln!(out, "  {}", case.name)?;
        if !case.tags.is_empty() {
            let tags: String = case.tags.iter().map(|t| format!("[{t}]")).collect();
            if colour {
                writeln!(out, "      {}", tags.cyan())?;
            } else {
                writeln!(out, "      {tags}")?;
            }
        }
    }
    writeln!(out, "{} matching test cases", cases.len())?;
    Ok(())
}

fn render_tags(config: &Config, cases: &[&TestCaseInfo], out: &mut dyn Write) -> Result<()> {
    let colour = config.colour_enabled();
    let counts = tag_counts(cases);

    writeln!(out, "Tags for matching test cases:")?;
    for (tag, count) in &counts {
        let tag = format!("[{tag}]");
        if colour {
            writeln!(out, "  {count:3}  {}", tag.cyan())?;
        } else {
            writeln!(out, "  {count:3}  {tag}")?;
        }
    }
    writeln!(out, "{} tags", counts.len())?;
    Ok(())
}
