//! oEmbed HTTP Client

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::error::OembedError;
use crate::base_url;

pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";

/// Client for TikTok's `/oembed` endpoint
pub struct OembedClient {
    client: Client,
    base_url: String,
}

impl OembedClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OembedError> {
        let base_url = base_url::normalize(base_url).map_err(OembedError::InvalidConfig)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OembedError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Fetch the oEmbed document for a canonical video page URL.
    pub async fn fetch(&self, page_url: &str) -> Result<Value, OembedError> {
        let endpoint = format!("{}/oembed", self.base_url);

        let resp = self
            .client
            .get(&endpoint)
            .query(&[("url", page_url)])
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }
}
