//! Page-budget arithmetic for per-site pagination.

/// Number of additional pages (beyond page 1) to fetch from a site that
/// reports `reported_pagecount` total pages, under a per-site budget of
/// `max_pages` requests including page 1. Clamped at 0.
pub fn extra_pages(reported_pagecount: u32, max_pages: u32) -> u32 {
    reported_pagecount
        .saturating_sub(1)
        .min(max_pages.saturating_sub(1))
}
