//! Tiklydown HTTP Client

use std::time::Duration;

use reqwest::{header::USER_AGENT, Client};
use serde_json::Value;

use super::error::TiklydownError;
use crate::base_url;

pub const DEFAULT_BASE_URL: &str = "https://api.tiklydown.eu.org";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Tiklydown HTTP Client
pub struct TiklydownClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl TiklydownClient {
    /// Create a new client against `base_url`.
    ///
    /// The user agent is sent explicitly on every request; the API rejects
    /// requests that do not look like a desktop browser.
    pub fn new(
        base_url: &str,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TiklydownError> {
        let base_url = base_url::normalize(base_url).map_err(TiklydownError::InvalidConfig)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TiklydownError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            user_agent: user_agent.into(),
        })
    }

    /// Fetch download info for a TikTok video URL.
    ///
    /// Returns the response body exactly as the API produced it.
    pub async fn download(&self, video_url: &str) -> Result<Value, TiklydownError> {
        let endpoint = format!("{}/api/download", self.base_url);

        let resp = self
            .client
            .get(&endpoint)
            .query(&[("url", video_url)])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?;

        let json: Value = resp.json().await?;

        tracing::debug!(url = %video_url, "Tiklydown responded");
        Ok(json)
    }
}
