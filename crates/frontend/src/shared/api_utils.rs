//! URL helpers for API requests
//!
//! Resource paths end with `/`; detail URLs are `<path><id>/`. The backend
//! redirects (and drops the body of) requests without the trailing slash.

use std::fmt::Display;

/// Join a base URL and a path the way browsers resolve `baseURL + url`:
/// exactly one `/` between them. An absolute `path` is returned as is.
///
/// # Example
/// ```rust
/// use hub_frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("/api/hub/", "/_ui/v1/users/"), "/api/hub/_ui/v1/users/");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Detail path for one resource: `<resource_path><id>/`
pub fn item_path(resource_path: &str, id: impl Display) -> String {
    format!("{}{}/", resource_path, id)
}

/// Append an already encoded query string
pub fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query)
    } else {
        format!("{}?{}", url, query)
    }
}

/// Path in the versioned UI API, e.g. `_ui/v1/users/`
pub fn ui_path(version: &str, url: &str) -> String {
    format!("_ui/{}/{}", version, url)
}

/// Id at the end of a pulp href, e.g. the `0186...` of
/// `/pulp/api/v3/roles/0186.../`
pub fn pulp_id_from_href(href: &str) -> Option<&str> {
    href.trim_end_matches('/').rsplit('/').next().filter(|id| !id.is_empty())
}
