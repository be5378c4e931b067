//! Episode extraction from raw play-URL blobs.
//!
//! Apple-CMS upstreams pack episode lists into a single string field:
//! `label$url` pairs joined by `#`, with whole play tracks (one per player
//! source) joined by `$$$`. Only `$`-prefixed `.m3u8` links are playable
//! for our purposes; everything else in the blob is ignored.
//!
//! First-page extraction picks the `$$$` segment with the most `.m3u8`
//! matches — some upstreams interleave unrelated metadata per segment, and
//! the richest segment is assumed to be the authoritative episode track.
//! Later pages match the whole blob flat, with no segment isolation. The
//! asymmetry is deliberate upstream-compatible behaviour; do not unify the
//! two modes without confirming intent.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Delimiter between play tracks in a raw play-URL blob.
pub const TRACK_DELIMITER: &str = "$$$";

/// `$`-prefixed http(s) link ending in `.m3u8`. Lazy so a trailing
/// parenthetical annotation is left outside the match.
static M3U8_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\$https?://[^"'\s]+?\.m3u8"#).expect("valid m3u8 pattern")
});

/// Which extraction heuristic to apply to a play-URL blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Page-1 behaviour: split on [`TRACK_DELIMITER`] and keep only the
    /// matches of the segment with the strictly largest match count
    /// (first-seen segment wins ties).
    FirstPage,
    /// Page ≥ 2 behaviour: match the whole blob with no segment isolation.
    Flat,
}

impl ExtractMode {
    /// The extraction mode upstream-compatible for `page` (1-based).
    pub fn for_page(page: u32) -> Self {
        if page <= 1 {
            Self::FirstPage
        } else {
            Self::Flat
        }
    }
}

/// Extract the ordered episode stream links from a raw play-URL blob.
///
/// Returns an empty vec if the blob is empty or contains no `.m3u8`
/// matches; malformed URLs are silently ignored. The output is
/// deduplicated preserving first occurrence, with the leading `$` stripped
/// and any trailing `(annotation)` dropped.
pub fn extract_episodes(blob: &str, mode: ExtractMode) -> Vec<String> {
    if blob.is_empty() {
        return Vec::new();
    }

    let matches: Vec<&str> = match mode {
        ExtractMode::Flat => M3U8_RE.find_iter(blob).map(|m| m.as_str()).collect(),
        ExtractMode::FirstPage => {
            let mut best: Vec<&str> = Vec::new();
            for segment in blob.split(TRACK_DELIMITER) {
                let found: Vec<&str> =
                    M3U8_RE.find_iter(segment).map(|m| m.as_str()).collect();
                if found.len() > best.len() {
                    best = found;
                }
            }
            best
        }
    };

    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|link| seen.insert(*link))
        .map(tidy_link)
        .collect()
}

/// Strip the leading `$` and truncate at the first `(`.
fn tidy_link(raw: &str) -> String {
    let link = raw.strip_prefix('$').unwrap_or(raw);
    match link.find('(') {
        Some(idx) => link[..idx].to_string(),
        None => link.to_string(),
    }
}
