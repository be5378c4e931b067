//! Core types: the canonical search record, upstream site configuration,
//! and the raw Apple-CMS response shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// A single search result, normalized from one upstream's raw item shape.
///
/// Immutable once built. Every record traces back to exactly one upstream
/// via `source`/`source_name`. `id` is upstream-assigned and not globally
/// unique across sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Upstream-assigned item identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Poster image URL.
    pub poster: String,
    /// Ordered playable stream URLs (m3u8 playlists); may be empty,
    /// never contains duplicates.
    pub episodes: Vec<String>,
    /// Key of the upstream site that produced this record.
    pub source: String,
    /// Human-readable name of that upstream site.
    pub source_name: String,
    /// Free-text category, if the upstream reported one.
    pub class: Option<String>,
    /// Release year — exactly 4 digits, or empty if the upstream's year
    /// field was absent or garbled.
    pub year: String,
    /// Plain-text description with HTML tags stripped.
    pub desc: String,
    /// Upstream type/category name, if reported.
    pub type_name: Option<String>,
}

/// Configuration record for one upstream video-index API.
///
/// Owned by configuration; read-only to the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSite {
    /// Short key identifying the upstream (stable, used for lookups).
    pub key: String,
    /// Human-readable upstream name.
    pub name: String,
    /// Base API URL, no trailing slash.
    pub api: String,
    /// Search path template for page 1. `{query}` is replaced with the
    /// URL-encoded query.
    pub search_path: String,
    /// Search path template for page ≥ 2. `{query}` and `{page}` are
    /// replaced.
    pub search_page_path: String,
}

impl ApiSite {
    /// Build the full request URL for `query` at `page`, substituting the
    /// URL-encoded query into the page-appropriate path template.
    pub fn page_url(&self, query: &str, page: u32) -> String {
        let encoded = urlencoding::encode(query);
        let path = if page <= 1 {
            self.search_path.replace("{query}", &encoded)
        } else {
            self.search_page_path
                .replace("{query}", &encoded)
                .replace("{page}", &page.to_string())
        };
        format!("{}{}", self.api, path)
    }
}

/// One raw search item as returned by an Apple-CMS-style upstream.
///
/// Field presence and types vary between upstreams (`vod_id` arrives as a
/// number or a string depending on the site), so everything is lenient
/// here. This shape never escapes the normalizer boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchItem {
    #[serde(default, deserialize_with = "number_or_string")]
    pub vod_id: String,
    #[serde(default)]
    pub vod_name: String,
    #[serde(default)]
    pub vod_pic: String,
    #[serde(default)]
    pub vod_play_url: String,
    #[serde(default)]
    pub vod_class: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub vod_year: String,
    #[serde(default)]
    pub vod_content: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
}

/// Upstream JSON envelope: `{ list: [...], pagecount: n }`.
///
/// A missing `list` deserializes to an empty vec; a `pagecount` that is
/// absent or not numeric becomes `None` (callers default it to 1).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub list: Vec<RawSearchItem>,
    #[serde(default, deserialize_with = "lenient_pagecount")]
    pub pagecount: Option<u32>,
}

/// Accept a JSON number or string, normalizing to `String`.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::String(s) => s,
    })
}

/// Accept a page count as a JSON number or numeric string; anything else
/// (null, objects, non-numeric strings) becomes `None` rather than failing
/// the whole response.
fn lenient_pagecount<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
