use url::Url;

/// A URL is workable only if it parses as an absolute URL with an http(s)
/// scheme. Browser-internal pages (about:, chrome:, file:) are rejected.
pub fn valid_url(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
