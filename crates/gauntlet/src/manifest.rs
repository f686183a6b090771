//! Loading registered cases from a JSON manifest.
//!
//! Case discovery belongs to the host harness, not to the engines; this
//! module is the thin collaborator that stands in for it. A manifest is a
//! JSON array of `{ "name": …, "description": … }` records, and a small
//! built-in sample set keeps the binary usable with no manifest at all.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use gauntlet_spec_rs::TestCaseInfo;

use crate::error::Result;

/// One manifest record.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    /// The case's display name.
    name: String,

    /// Bracketed tag groups, e.g. `"[net][slow]"`.
    #[serde(default)]
    description: String,
}

/// Loads the case records from a manifest file.
pub fn load_cases(path: &Path) -> Result<Vec<TestCaseInfo>> {
    let file = File::open(path)?;
    let entries: Vec<ManifestEntry> = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries
        .into_iter()
        .map(|e| TestCaseInfo::new(e.name, e.description))
        .collect())
}

/// The built-in sample set used when no manifest is given.
pub fn sample_cases() -> Vec<TestCaseInfo> {
    vec![
        TestCaseInfo::new("connect to upstream", "[net]"),
        TestCaseInfo::new("reconnect after timeout", "[net][slow]"),
        TestCaseInfo::new("update index", "[db]"),
        TestCaseInfo::new("update index concurrently", "[db][slow]"),
        TestCaseInfo::new("render summary", ""),
        TestCaseInfo::new("internal bookkeeping", "[.]"),
    ]
}
