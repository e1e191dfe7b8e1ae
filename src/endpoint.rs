//! Endpoint URL construction

use reqwest::Url;

/// Append `segments` to `base`, each as a single percent-encoded path segment
///
/// Returns `None` when `base` is not a hierarchical URL or a segment is `.` or
/// `..`. An empty trailing segment yields a trailing slash.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Option<Url> {
    if segments.iter().any(|s| matches!(*s, "." | "..")) {
        return None;
    }

    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}
