//! TikWM provider (secondary)

use async_trait::async_trait;
use tikfetch_providers::{TikwmClient, TikwmVideo};

use super::traits::{DownloadPayload, DownloadProvider};

/// Remaps TikWM video data into the stable download shape.
pub struct TikwmProvider {
    client: TikwmClient,
}

impl TikwmProvider {
    #[must_use]
    pub const fn new(client: TikwmClient) -> Self {
        Self { client }
    }
}

/// `{ title, author, thumbnail, hd, watermarked, audio }`
#[must_use]
pub fn normalize(video: TikwmVideo) -> DownloadPayload {
    let mut payload = DownloadPayload::new();
    payload.insert("title".to_string(), video.title);
    payload.insert("author".to_string(), video.author);
    payload.insert("thumbnail".to_string(), video.cover);
    payload.insert("hd".to_string(), video.play);
    payload.insert("watermarked".to_string(), video.wmplay);
    payload.insert("audio".to_string(), video.music);
    payload
}

#[async_trait]
impl DownloadProvider for TikwmProvider {
    fn name(&self) -> &'static str {
        "tikwm"
    }

    async fn fetch(&self, url: &str) -> Option<DownloadPayload> {
        match self.client.video_info(url).await {
            Ok(video) => Some(normalize(video)),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "TikWM lookup failed");
                None
            }
        }
    }
}
