//! Base URL normalization shared by the clients.

use url::Url;

/// Validate an upstream base URL and strip any trailing slash so paths can
/// be appended with `format!("{base}/path")`.
pub(crate) fn normalize(base_url: &str) -> Result<String, String> {
    let parsed = Url::parse(base_url).map_err(|e| format!("{base_url}: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("{base_url}: unsupported scheme {}", parsed.scheme()));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}
