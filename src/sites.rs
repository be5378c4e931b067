//! Built-in upstream site table.
//!
//! All built-ins are Apple-CMS v10 deployments sharing the standard
//! `?ac=videolist` search interface, so the path templates are common and
//! only key/name/base URL vary. [`crate::SearchConfig`] starts from this
//! table; callers can replace or extend it freely.

use crate::types::ApiSite;

const SEARCH_PATH: &str = "?ac=videolist&wd={query}";
const SEARCH_PAGE_PATH: &str = "?ac=videolist&wd={query}&pg={page}";

/// `(key, display name, base API URL)` for each built-in upstream.
const BUILTIN_SITES: &[(&str, &str, &str)] = &[
    ("dyttzy", "电影天堂资源", "http://caiji.dyttzyapi.com/api.php/provide/vod"),
    ("ruyi", "如意资源", "https://cj.rycjapi.com/api.php/provide/vod"),
    ("bfzy", "暴风资源", "https://bfzyapi.com/api.php/provide/vod"),
    ("tyyszy", "天涯资源", "https://tyyszy.com/api.php/provide/vod"),
    ("ffzy", "非凡资源", "http://ffzy5.tv/api.php/provide/vod"),
    ("heimuer", "黑木耳", "https://json.heimuer.xyz/api.php/provide/vod"),
    ("zy350", "350资源", "https://www.zy350.tv/api.php/provide/vod"),
    ("ikun", "iKun资源", "https://ikunzyapi.com/api.php/provide/vod"),
];

/// The built-in upstream sites, in configuration order.
pub fn default_sites() -> Vec<ApiSite> {
    BUILTIN_SITES
        .iter()
        .map(|&(key, name, api)| ApiSite {
            key: key.to_string(),
            name: name.to_string(),
            api: api.to_string(),
            search_path: SEARCH_PATH.to_string(),
            search_page_path: SEARCH_PAGE_PATH.to_string(),
        })
        .collect()
}

/// Look up a site by key. Returns `None` if no configured site matches.
pub fn find_site<'a>(sites: &'a [ApiSite], key: &str) -> Option<&'a ApiSite> {
    sites.iter().find(|site| site.key == key)
}
