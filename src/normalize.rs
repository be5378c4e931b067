//! Item normalization: one upstream's raw item shape → the canonical
//! [`SearchResult`] record.

use crate::episodes::{extract_episodes, ExtractMode};
use crate::sanitize::{clean_html_tags, extract_year};
use crate::types::{ApiSite, RawSearchItem, SearchResult};

/// Map one raw upstream item to the canonical record.
///
/// Pure and total: missing optional fields map to absent/empty
/// equivalents, never to an error. `mode` selects the page-appropriate
/// episode extraction heuristic.
pub fn normalize_item(raw: &RawSearchItem, site: &ApiSite, mode: ExtractMode) -> SearchResult {
    SearchResult {
        id: raw.vod_id.clone(),
        title: raw.vod_name.clone(),
        poster: raw.vod_pic.clone(),
        episodes: extract_episodes(&raw.vod_play_url, mode),
        source: site.key.clone(),
        source_name: site.name.clone(),
        class: raw.vod_class.clone(),
        year: extract_year(&raw.vod_year),
        desc: clean_html_tags(raw.vod_content.as_deref().unwrap_or_default()),
        type_name: raw.type_name.clone(),
    }
}
