//! Page fetcher: one bounded-timeout request to one upstream for one page.
//!
//! [`fetch_page`] never fails — every failure mode (network error, timeout,
//! non-2xx status, malformed JSON, unexpected shape) degrades to an empty
//! page so that one bad fetch only ever costs its own contribution.

use crate::config::SearchConfig;
use crate::episodes::ExtractMode;
use crate::error::SearchError;
use crate::http;
use crate::normalize::normalize_item;
use crate::types::{ApiSite, SearchPage, SearchResult};

/// One fetched page of upstream results.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Normalized results, in upstream order.
    pub results: Vec<SearchResult>,
    /// Upstream-reported total page count; defaults to 1 when absent or
    /// invalid. Only meaningful for page-1 fetches.
    pub pagecount: u32,
}

impl FetchedPage {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            pagecount: 1,
        }
    }
}

/// Fetch one search page from one upstream site.
///
/// Failures are logged at warn level and neutralized to an empty page;
/// this function has no error path by contract.
pub async fn fetch_page(
    site: &ApiSite,
    query: &str,
    page: u32,
    config: &SearchConfig,
) -> FetchedPage {
    match try_fetch_page(site, query, page, config).await {
        Ok(fetched) => {
            tracing::debug!(site = %site.key, page, count = fetched.results.len(), "page fetched");
            fetched
        }
        Err(err) => {
            tracing::warn!(site = %site.key, page, error = %err, "page fetch failed");
            FetchedPage::empty()
        }
    }
}

async fn try_fetch_page(
    site: &ApiSite,
    query: &str,
    page: u32,
    config: &SearchConfig,
) -> Result<FetchedPage, SearchError> {
    let client = http::build_client(config)?;
    let url = site.page_url(query, page);
    tracing::trace!(site = %site.key, %url, "requesting search page");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("{} request failed: {e}", site.key)))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("{} HTTP error: {e}", site.key)))?;

    let body: SearchPage = response
        .json()
        .await
        .map_err(|e| SearchError::Parse(format!("{} returned malformed JSON: {e}", site.key)))?;

    let mode = ExtractMode::for_page(page);
    let results = body
        .list
        .iter()
        .map(|item| normalize_item(item, site, mode))
        .collect();

    Ok(FetchedPage {
        results,
        pagecount: body.pagecount.unwrap_or(1),
    })
}
