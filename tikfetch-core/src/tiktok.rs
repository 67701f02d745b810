//! TikTok URL helpers

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Substring a URL must contain to be accepted as a TikTok link.
///
/// This is a containment check, not a host check: `https://evil.example/?tiktok.com`
/// passes.
pub const TIKTOK_DOMAIN: &str = "tiktok.com";

/// `/video/<digits>` anywhere in the URL, ASCII digits only
static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This is a compile-time constant regex literal that is known to be valid.
    Regex::new(r"/video/([0-9]+)").expect("video id regex is a compile-time constant and always valid")
});

/// Characters left untouched by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn is_tiktok_url(url: &str) -> bool {
    url.contains(TIKTOK_DOMAIN)
}

/// Numeric TikTok video id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the first `/video/<digits>` id from a URL.
    ///
    /// Returns `None` when the URL has no such segment; that is an expected
    /// outcome for short links and profile URLs.
    #[must_use]
    pub fn extract(url: &str) -> Option<Self> {
        VIDEO_ID_REGEX
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical video page URL for an account and id
#[must_use]
pub fn video_page_url(account: &str, id: &VideoId) -> String {
    format!("https://www.tiktok.com/@{account}/video/{id}")
}

/// Percent-encode a query component the way browsers' `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
