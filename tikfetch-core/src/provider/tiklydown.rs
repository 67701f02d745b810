//! Tiklydown provider (primary)

use async_trait::async_trait;
use tikfetch_providers::TiklydownClient;

use super::traits::{payload_from_value, DownloadPayload, DownloadProvider};

/// Passes the Tiklydown response through verbatim.
pub struct TiklydownProvider {
    client: TiklydownClient,
}

impl TiklydownProvider {
    #[must_use]
    pub const fn new(client: TiklydownClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DownloadProvider for TiklydownProvider {
    fn name(&self) -> &'static str {
        "tiklydown"
    }

    async fn fetch(&self, url: &str) -> Option<DownloadPayload> {
        match self.client.download(url).await {
            Ok(body) => {
                let payload = payload_from_value(body);
                if payload.is_none() {
                    tracing::warn!(url = %url, "Tiklydown returned an empty payload");
                }
                payload
            }
            Err(e) => {
                tracing::error!("Tiklydown API error: {}", e);
                None
            }
        }
    }
}
