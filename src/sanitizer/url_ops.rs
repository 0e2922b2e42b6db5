use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use url::Url;

/// Strip tracking data from a URL: the whole query string, trailing
/// `/ref/...` and `/ref=...` path segments, and the fragment.
pub fn sanitize_url(raw: &str) -> Result<String> {
    sanitize_url_with(raw, &[])
}

/// Same as [`sanitize_url`], with additional user-configured path patterns
/// applied after the built-in ones.
pub fn sanitize_url_with(raw: &str, extra_patterns: &[Regex]) -> Result<String> {
    let mut url = Url::parse(raw.trim())
        .with_context(|| format!("Failed to parse URL: {}", raw.trim()))?;

    debug!("Original URL: {}", url);

    // Remove everything after '?'
    url.set_query(None);

    // Remove ref segments from the path
    let stripped = strip_ref_segments(url.path(), extra_patterns);
    url.set_path(&stripped);

    // Remove the fragment
    url.set_fragment(None);

    let sanitized = url.to_string();
    debug!("Sanitized URL: {}", sanitized);
    Ok(sanitized)
}

fn strip_ref_segments(path: &str, extra_patterns: &[Regex]) -> String {
    let slash_ref = Regex::new(r"/ref/.*$").unwrap();
    let eq_ref = Regex::new(r"/ref=.*$").unwrap();

    let mut stripped = slash_ref.replace(path, "").to_string();
    stripped = eq_ref.replace(&stripped, "").to_string();

    for pattern in extra_patterns {
        stripped = pattern.replace(&stripped, "").to_string();
    }

    stripped
}
