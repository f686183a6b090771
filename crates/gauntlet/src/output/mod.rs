//! Rendering the selection through a reporter.

use std::io::Write;

use gauntlet_spec_rs::TestCaseInfo;

use crate::config::Config;
use crate::error::{CommandError, Result};

mod console;
mod json;

/// What to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// The selected case names with their tags.
    Tests,
    /// The tags of the selected cases, with counts.
    Tags,
}

/// Renders the selected cases with the configured reporter.
pub fn render(
    config: &Config,
    listing: Listing,
    cases: &[&TestCaseInfo],
    out: &mut dyn Write,
) -> Result<()> {
    match config.reporter() {
        "console" => console::render(config, listing, cases, out),
        "json" => json::render(listing, cases, out),
        other => Err(CommandError::UnknownReporter {
            name: other.to_string(),
        }),
    }
}

/// Tags of the selected cases with occurrence counts, in first-seen order.
fn tag_counts<'a>(cases: &[&'a TestCaseInfo]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for case in cases {
        for tag in &case.tags {
            match counts.iter_mut().find(|(t, _)| *t == tag.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag.as_str(), 1)),
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;

    fn cases() -> Vec<TestCaseInfo> {
        vec![
            TestCaseInfo::new("a", "[one]"),
            TestCaseInfo::new("b", "[one][two]"),
        ]
    }

    fn render_with(reporter: &str, listing: Listing) -> Result<String> {
        let data = RunConfig {
            reporter_names: vec![reporter.to_string()],
            use_colour: crate::config::UseColour::No,
            ..RunConfig::default()
        };
        let config = Config::new(data);
        let cases = cases();
        let selected: Vec<&TestCaseInfo> = cases.iter().collect();
        let mut out = Vec::new();
        render(&config, listing, &selected, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_console_listing() {
        let text = render_with("console", Listing::Tests).unwrap();
        assert!(text.contains("a"));
        assert!(text.contains("[one][two]"));
        assert!(text.contains("2 matching test cases"));
    }

    #[test]
    fn test_console_tag_listing() {
        let text = render_with("console", Listing::Tags).unwrap();
        assert!(text.contains("[one]"));
        assert!(text.contains("2"));
        assert!(text.contains("2 tags"));
    }

    #[test]
    fn test_json_listing() {
        let text = render_with("json", Listing::Tests).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cases"].as_array().unwrap().len(), 2);
        assert_eq!(value["cases"][0]["name"], "a");
        assert_eq!(value["cases"][1]["tags"][1], "two");
    }

    #[test]
    fn test_json_tag_listing() {
        let text = render_with("json", Listing::Tags).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tags"][0]["tag"], "one");
        assert_eq!(value["tags"][0]["count"], 2);
    }

    #[test]
    fn test_unknown_reporter() {
        let err = render_with("teamcity", Listing::Tests).unwrap_err();
        assert!(err.to_string().contains("teamcity"));
        assert!(err.to_string().contains("known reporters"));
    }

    #[test]
    fn test_tag_counts_keep_first_seen_order() {
        let cases = cases();
        let selected: Vec<&TestCaseInfo> = cases.iter().collect();
        assert_eq!(tag_counts(&selected), vec![("one", 2), ("two", 1)]);
    }
}
