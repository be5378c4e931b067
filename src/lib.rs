//! # vod-search
//!
//! Aggregated video search across a configurable set of Apple-CMS-style
//! upstream video-index APIs.
//!
//! Given a query, the crate fans out first-page requests to every
//! configured upstream concurrently, paginates additional pages per site
//! under a bounded page budget, normalizes each upstream's raw item shape
//! into one canonical [`SearchResult`] record — extracting playable
//! `.m3u8` episode links from the raw play-URL blob on the way — and
//! flattens everything into a single collection.
//!
//! ## Design
//!
//! - Two-level launch-all-then-await-all fan-out: across sites, and
//!   across additional pages within a site
//! - Every page fetch carries its own 8-second timeout and swallows its
//!   own failures; one dead upstream or slow page never affects another
//! - No retries, no cross-request caching, no cross-source deduplication:
//!   records are built fresh per request and returned once all branches
//!   settle
//! - Output order is deterministic: site-configuration order, then page
//!   order within a site

pub mod config;
pub mod episodes;
pub mod error;
pub mod fetch;
pub mod http;
pub mod normalize;
pub mod orchestrator;
pub mod sanitize;
pub mod sites;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use types::{ApiSite, SearchResult};

/// Search all configured upstream sites concurrently.
///
/// An empty or whitespace-only query returns `Ok(vec![])` without
/// contacting any upstream. Upstream failures (network, timeout, bad
/// JSON, zero results) never surface as errors — a fully unreachable
/// upstream set yields an empty list.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` fails validation.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vod_search::Result<()> {
/// let config = vod_search::SearchConfig::from_env();
/// let results = vod_search::search("流浪地球", &config).await?;
/// for result in &results {
///     println!("{} [{}] {} episodes", result.title, result.source_name, result.episodes.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    config.validate()?;
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(orchestrator::search::aggregate_search(query, config).await)
}

/// Search a single upstream site and keep only exact-title matches.
///
/// Runs only `site_key`'s searcher and filters its output to records
/// whose `title` equals `query` exactly (case-sensitive, not substring).
/// Used for resolving a specific known title on a specific source.
///
/// # Errors
///
/// Returns [`SearchError::UnknownSite`] if no configured site has
/// `site_key`, or [`SearchError::Config`] if `config` fails validation.
pub async fn search_one(
    site_key: &str,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let site = sites::find_site(&config.sites, site_key)
        .ok_or_else(|| SearchError::UnknownSite(site_key.to_string()))?;
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let results = orchestrator::search::search_site(site, query, config).await;
    Ok(results
        .into_iter()
        .filter(|result| result.title == query)
        .collect())
}

/// The configured upstream sites, verbatim. No network I/O.
pub fn list_sites(config: &SearchConfig) -> &[ApiSite] {
    &config.sites
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_site(key: &str) -> ApiSite {
        ApiSite {
            key: key.into(),
            name: format!("{key} name"),
            api: "http://127.0.0.1:9/api.php/provide/vod".into(),
            search_path: "?ac=videolist&wd={query}".into(),
            search_page_path: "?ac=videolist&wd={query}&pg={page}".into(),
        }
    }

    #[tokio::test]
    async fn empty_query_returns_empty_without_network() {
        // An unroutable site would hang or fail if contacted; the empty
        // query must short-circuit before any request is issued.
        let config = SearchConfig {
            sites: vec![unreachable_site("dead")],
            ..Default::default()
        };
        let results = search("", &config).await.expect("should not error");
        assert!(results.is_empty());

        let results = search("   ", &config).await.expect("should not error");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_validates_config() {
        let config = SearchConfig {
            max_pages: 0,
            ..Default::default()
        };
        let result = search("query", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_pages"));
    }

    #[tokio::test]
    async fn search_one_unknown_site_is_explicit_error() {
        let config = SearchConfig::default();
        let result = search_one("nosuch", "query", &config).await;
        match result {
            Err(SearchError::UnknownSite(key)) => assert_eq!(key, "nosuch"),
            other => panic!("expected UnknownSite, got {other:?}"),
        }
    }

    #[test]
    fn list_sites_is_verbatim_passthrough() {
        let config = SearchConfig::default();
        let sites = list_sites(&config);
        assert_eq!(sites, config.sites.as_slice());
    }
}
