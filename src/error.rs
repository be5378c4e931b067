//! Error types for the vod-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Upstream failures (network, timeouts,
//! malformed JSON) are neutralized inside the pipeline and never reach
//! callers; the variants here cover what can still surface at the API
//! boundary plus the internal fetch plumbing.

/// Errors that can occur during aggregated video search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No configured upstream site matches the requested key.
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// An HTTP request to an upstream site failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an upstream JSON response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for vod-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
