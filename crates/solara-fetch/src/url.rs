//! Calculation service URL construction.

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable selecting the service base URL.
pub const BASE_URL_ENV: &str = "SOLARA_API_URL";

/// Normalizes a configured base URL.
///
/// Trailing slashes are stripped. A missing or blank value falls back to
/// [`DEFAULT_BASE_URL`].
///
/// # Example
///
/// ```
/// use solara_fetch::url::base_url;
///
/// assert_eq!(base_url(Some("https://api.example.com//")), "https://api.example.com");
/// assert_eq!(base_url(None), "http://localhost:8000");
/// ```
#[must_use]
pub fn base_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Builds the estimate endpoint URL: `{base}/calculate`.
#[must_use]
pub fn calculate_url(base: &str) -> String {
    format!("{base}/calculate")
}

/// Builds the service root URL: `{base}/`.
#[must_use]
pub fn root_url(base: &str) -> String {
    format!("{base}/")
}
