//! Video info lookup via oEmbed

use serde_json::Value;
use tikfetch_providers::OembedClient;

use crate::error::{Error, Result};
use crate::tiktok::{video_page_url, VideoId};

pub const INVALID_ID_MESSAGE: &str = "Invalid video ID";

pub struct VideoInfoService {
    client: OembedClient,
    account: String,
}

impl VideoInfoService {
    /// `account` is the profile name placed in the oEmbed page URL; it is
    /// fixed and not taken from the caller's URL.
    #[must_use]
    pub fn new(client: OembedClient, account: impl Into<String>) -> Self {
        Self {
            client,
            account: account.into(),
        }
    }

    /// Fetch the oEmbed document for the video referenced by `url`.
    pub async fn fetch(&self, url: Option<&str>) -> Result<Value> {
        let id = url
            .and_then(VideoId::extract)
            .ok_or_else(|| Error::InvalidInput(INVALID_ID_MESSAGE.to_string()))?;

        let page_url = video_page_url(&self.account, &id);
        self.client.fetch(&page_url).await.map_err(|e| {
            tracing::warn!(video_id = %id, error = %e, "oEmbed lookup failed");
            Error::Upstream(e.to_string())
        })
    }
}
