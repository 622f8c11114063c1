//! Request URL construction.

use albion_types::QueryParams;

/// Builds a request URL from a base, a path and optional query parameters.
///
/// URL format: `{base}{path}[?{query}]`. The query is only appended when at
/// least one parameter is present, so empty parameters never leave a
/// trailing `?`.
///
/// # Example
///
/// ```
/// use albion_fetch::url::build_url;
/// use albion_types::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.append("guildId", "abc").append("limit", 10);
///
/// let url = build_url("https://gameinfo.albiononline.com/api/gameinfo", "/events", Some(&query));
/// assert_eq!(url, "https://gameinfo.albiononline.com/api/gameinfo/events?guildId=abc&limit=10");
/// ```
#[must_use]
pub fn build_url(base: &str, path: &str, query: Option<&QueryParams>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{path}?{}", query.encode()),
        None => format!("{base}{path}"),
    }
}
