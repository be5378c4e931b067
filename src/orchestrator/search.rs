//! Concurrent search fan-out: per-site pagination and cross-site
//! aggregation.
//!
//! Both levels use [`futures::future::join_all`]: all branches start
//! before any is awaited, no branch is cancelled because a sibling
//! finished or failed, and the output order follows input order — pages
//! are assembled by page index and sites by configuration order, never by
//! arrival time.

use futures::future::join_all;

use crate::config::SearchConfig;
use crate::fetch::fetch_page;
use crate::types::{ApiSite, SearchResult};

use super::pagination::extra_pages;

/// Search one upstream site, paginating under the configured budget.
///
/// Fetches page 1 first; zero items there (including every failure case)
/// means no further pages are attempted. Otherwise pages
/// `2..=extra + 1` are fetched concurrently and concatenated after the
/// first page in increasing page order. Infallible: each page fetch
/// neutralizes its own failures.
pub async fn search_site(site: &ApiSite, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let first = fetch_page(site, query, 1, config).await;
    if first.results.is_empty() {
        tracing::debug!(site = %site.key, "no first-page results, skipping pagination");
        return Vec::new();
    }

    let extra = extra_pages(first.pagecount, config.max_pages);
    let mut results = first.results;

    if extra > 0 {
        tracing::trace!(site = %site.key, extra, "fetching additional pages");
        let fetches: Vec<_> = (2..=extra + 1)
            .map(|page| fetch_page(site, query, page, config))
            .collect();
        // join_all preserves input order: page-indexed assembly.
        for fetched in join_all(fetches).await {
            results.extend(fetched.results);
        }
    }

    tracing::debug!(site = %site.key, count = results.len(), "site search complete");
    results
}

/// Search every configured site concurrently and flatten the results in
/// site-configuration order.
///
/// Site pipelines are isolated: a failure inside one site's searcher only
/// ever empties that site's contribution.
pub async fn aggregate_search(query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let searches: Vec<_> = config
        .sites
        .iter()
        .map(|site| search_site(site, query, config))
        .collect();

    let results: Vec<SearchResult> = join_all(searches).await.into_iter().flatten().collect();
    tracing::debug!(sites = config.sites.len(), count = results.len(), "aggregation complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiSite;

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
    async fn unreachable_site_yields_empty_not_error() {
        let config = SearchConfig {
            timeout_seconds: 2,
            ..Default::default()
        };
        let results = search_site(&unreachable_site("dead"), "query", &config).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn fully_unreachable_upstream_set_aggregates_to_empty() {
        let config = SearchConfig {
            sites: vec![unreachable_site("dead1"), unreachable_site("dead2")],
            timeout_seconds: 2,
            ..Default::default()
        };
        let results = aggregate_search("query", &config).await;
        assert!(results.is_empty());
    }
}
