//! Direct download URL resolution
//!
//! No real resolver exists yet: [`ProxyUrlResolver`] only builds a link to a
//! pass-through proxy. The trait is the seam for a working implementation.

use async_trait::async_trait;

use crate::config::is_http_url;
use crate::error::{Error, Result};
use crate::tiktok::encode_uri_component;

pub const DEFAULT_PROXY_BASE_URL: &str = "https://cors-proxy.example.com";
pub const DEFAULT_QUALITY: &str = "hd";

#[async_trait]
pub trait DirectUrlResolver: Send + Sync {
    /// Resolve a playable URL, or `None` if the video cannot be found.
    async fn resolve(&self, url: &str, quality: &str) -> Result<Option<String>>;
}

/// Builds `{base}/?url=<encoded>&quality=<quality>` without contacting anything.
pub struct ProxyUrlResolver {
    base_url: String,
}

impl ProxyUrlResolver {
    pub fn new(base_url: &str) -> Result<Self> {
        if !is_http_url(base_url) {
            return Err(Error::Config(format!("invalid proxy base URL: {base_url}")));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn build_url(&self, url: &str, quality: &str) -> String {
        format!(
            "{}/?url={}&quality={}",
            self.base_url,
            encode_uri_component(url),
            encode_uri_component(quality)
        )
    }
}

#[async_trait]
impl DirectUrlResolver for ProxyUrlResolver {
    async fn resolve(&self, url: &str, quality: &str) -> Result<Option<String>> {
        Ok(Some(self.build_url(url, quality)))
    }
}
