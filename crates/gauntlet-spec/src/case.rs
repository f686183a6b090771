//! The test case record the selection engine matches against.

/// Tags that mark a case as hidden from default selection.
const HIDDEN_TAGS: &[&str] = &[".", "!hide"];

/// A registered test case, as seen by the selection engine.
///
/// The engine only needs a read-only view: the display name and the set of
/// tags. Tags are extracted once at construction from the bracketed groups
/// in the description string (`"[slow][net]"` yields the tags `slow` and
/// `net`) rather than re-parsed on every match.
///
/// Name matching is case-sensitive; tag matching is case-insensitive, so
/// tags are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseInfo {
    /// The case's display name.
    pub name: String,

    /// The raw description string the tags were extracted from.
    pub description: String,

    /// Tags in description order, lowercased.
    pub tags: Vec<String>,

    /// Whether the case carries a hidden marker tag (`[.]` or `[!hide]`).
    ///
    /// Hidden cases are excluded from default selection but still match
    /// filters like any other case.
    pub hidden: bool,
}

impl TestCaseInfo {
    /// Creates a case record, extracting tags from the description.
    ///
    /// Each `[...]` group in the description contributes one tag; empty
    /// groups are ignored. Text outside brackets is kept only as part of
    /// the stored description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        let tags = extract_tags(&description);
        let hidden = tags.iter().any(|t| HIDDEN_TAGS.contains(&t.as_str()));
        Self {
            name: name.into(),
            description,
            tags,
            hidden,
        }
    }

    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Extracts the bracketed tag groups from a description string.
fn extract_tags(description: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current: Option<String> = None;

    for c in description.chars() {
        match c {
            '[' => current = Some(String::new()),
            ']' => {
                if let Some(tag) = current.take() {
                    if !tag.is_empty() {
                        tags.push(tag.to_lowercase());
                    }
                }
            }
            _ => {
                if let Some(tag) = current.as_mut() {
                    tag.push(c);
                }
            }
        }
    }

    tags
}
