//! Machine-readable JSON reporter.

use std::io::Write;

use serde::Serialize;

use gauntlet_spec_rs::TestCaseInfo;

use crate::error::Result;
use crate::output::{tag_counts, Listing};

/// JSON output structure for the case listing.
#[derive(Serialize)]
struct ListingOutput<'a> {
    cases: Vec<CaseOutput<'a>>,
}

/// JSON output structure for a single case.
#[derive(Serialize)]
struct CaseOutput<'a> {
    name: &'a str,
    tags: &'a [String],
    hidden: bool,
}

/// JSON output structure for the tag listing.
#[derive(Serialize)]
struct TagsOutput<'a> {
    tags: Vec<TagCountOutput<'a>>,
}

/// JSON output structure for one tag with its occurrence count.
#[derive(Serialize)]
struct TagCountOutput<'a> {
    tag: &'a str,
    count: usize,
}

pub(super) fn render(listing: Listing, cases: &[&TestCaseInfo], out: &mut dyn Write) -> Result<()> {
    match listing {
        Listing::Tests => {
            let output = ListingOutput {
                cases: cases
                    .iter()
                    .map(|c| CaseOutput {
                        name: &c.name,
                        tags: &c.tags,
                        hidden: c.hidden,
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
        }
        Listing::Tags => {
            let output = TagsOutput {
                tags: tag_counts(cases)
                    .into_iter()
                    .map(|(tag, count)| TagCountOutput { tag, count })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
