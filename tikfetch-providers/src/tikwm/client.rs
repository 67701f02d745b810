//! TikWM HTTP Client

use std::time::Duration;

use reqwest::Client;

use super::error::TikwmError;
use super::types::{TikwmResponse, TikwmVideo};
use crate::base_url;

pub const DEFAULT_BASE_URL: &str = "https://www.tikwm.com";

/// TikWM HTTP Client
pub struct TikwmClient {
    client: Client,
    base_url: String,
}

impl TikwmClient {
    /// Create a new TikWM client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TikwmError> {
        let base_url = base_url::normalize(base_url).map_err(TikwmError::InvalidConfig)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TikwmError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Look up a TikTok video URL.
    ///
    /// A non-zero `code` is reported as [`TikwmError::Api`].
    pub async fn video_info(&self, video_url: &str) -> Result<TikwmVideo, TikwmError> {
        let endpoint = format!("{}/api/", self.base_url);

        let resp = self
            .client
            .get(&endpoint)
            .query(&[("url", video_url)])
            .send()
            .await?
            .error_for_status()?;

        let json: TikwmResponse = resp.json().await?;

        if json.code != 0 {
            return Err(TikwmError::Api {
                code: json.code,
                message: json.msg.unwrap_or_default(),
            });
        }

        json.data
            .ok_or_else(|| TikwmError::Parse("Missing video data".to_string()))
    }
}
