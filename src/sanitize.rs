//! Small text utilities: HTML tag stripping and year extraction.

use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid html tag pattern"));
static NEWLINE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("valid newline run pattern"));
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year pattern"));

/// Strip HTML tags from upstream description text.
///
/// Tags become newlines so adjacent block elements stay separated, runs of
/// newlines collapse to one, and the result is trimmed. Total: any input
/// yields plain text, empty input yields an empty string.
pub fn clean_html_tags(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let without_tags = HTML_TAG_RE.replace_all(raw, "\n");
    NEWLINE_RUN_RE.replace_all(&without_tags, "\n").trim().to_string()
}

/// Extract the first run of exactly 4 consecutive digits from a raw year
/// field. Absent or non-matching input yields an empty string — never a
/// partial year.
pub fn extract_year(raw: &str) -> String {
    YEAR_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
