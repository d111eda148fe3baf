//! URL helper functions for iwaatch.com
//!
//! Provides functions for building search URLs and resolving page links.

/// Default site root
pub const BASE_URL: &str = "https://iwaatch.com";

/// Builds the search URL for a given keyword
///
/// Percent-encodes the keyword and puts it in the `q` query parameter.
///
/// # Arguments
/// * `base_url` - Site root, without a trailing slash
/// * `keyword` - Free-text search keyword
///
/// # Example
/// ```
/// use iwaatch_core::url::{build_search_url, BASE_URL};
/// let url = build_search_url(BASE_URL, "the matrix");
/// assert_eq!(url, "https://iwaatch.com/?q=the%20matrix");
/// ```
pub fn build_search_url(base_url: &str, keyword: &str) -> String {
    let encoded = urlencoding::encode(keyword);
    format!("{}/?q={}", base_url.trim_end_matches('/'), encoded)
}

/// Resolves a page link against the site root
///
/// Absolute URLs pass through unchanged; root-relative paths are joined
/// to `base_url`. Returns `None` for empty input.
///
/// # Example
/// ```
/// use iwaatch_core::url::{resolve_url, BASE_URL};
/// assert_eq!(
///     resolve_url(BASE_URL, "/movie/inception").as_deref(),
///     Some("https://iwaatch.com/movie/inception")
/// );
/// ```
pub fn resolve_url(base_url: &str, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if url.starts_with('/') && !url.starts_with("//") {
        return Some(format!("{}{}", base_url.trim_end_matches('/'), url));
    }

    Some(url.to_string())
}
