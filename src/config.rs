//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which upstream sites are queried, the per-site
//! page budget, and the per-request timeout. The page budget can be seeded
//! from the `MAX_SEARCH_PAGES` environment variable via [`SearchConfig::from_env`];
//! after that it is an explicit value threaded through the pipeline, not
//! ambient global state.

use crate::error::SearchError;
use crate::sites::default_sites;
use crate::types::ApiSite;

/// Environment variable read by [`SearchConfig::from_env`].
pub const MAX_SEARCH_PAGES_ENV: &str = "MAX_SEARCH_PAGES";

const DEFAULT_MAX_PAGES: u32 = 5;
const DEFAULT_TIMEOUT_SECONDS: u64 = 8;

/// Configuration for an aggregated search operation.
///
/// Use [`Default::default()`] for the built-in site table and default
/// limits, or construct with field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upstream sites to query. Queried concurrently; results are
    /// concatenated in this order.
    pub sites: Vec<ApiSite>,
    /// Maximum number of pages requested per site per search, including
    /// page 1. Must be at least 1.
    pub max_pages: u32,
    /// Per-request HTTP timeout in seconds. Each page fetch carries its
    /// own timeout; one slow page never delays or cancels another.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            max_pages: DEFAULT_MAX_PAGES,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Build a config from the process environment.
    ///
    /// Reads `MAX_SEARCH_PAGES` once: unparsable or missing values fall
    /// back to the default (5); parsed values below 1 are clamped to 1.
    /// Intended to be called once at startup.
    pub fn from_env() -> Self {
        let max_pages = std::env::var(MAX_SEARCH_PAGES_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|v| v.max(1))
            .unwrap_or(DEFAULT_MAX_PAGES);
        Self {
            max_pages,
            ..Default::default()
        }
    }

    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `max_pages` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `sites` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_pages == 0 {
            return Err(SearchError::Config("max_pages must be greater than 0".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.sites.is_empty() {
            return Err(SearchError::Config(
                "at least one site must be configured".into(),
            ));
        }
        Ok(())
    }
}
