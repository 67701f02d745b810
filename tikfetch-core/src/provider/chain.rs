//! Ordered download fallback

use std::sync::Arc;

use super::traits::{DownloadPayload, DownloadProvider};
use crate::error::{Error, Result};
use crate::tiktok::is_tiktok_url;

pub const INVALID_URL_MESSAGE: &str = "Invalid TikTok URL";
pub const EXHAUSTED_MESSAGE: &str = "Failed to fetch video";

/// Tries providers in order; the first non-empty payload wins.
#[derive(Clone)]
pub struct DownloadChain {
    providers: Vec<Arc<dyn DownloadProvider>>,
}

impl DownloadChain {
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn DownloadProvider>>) -> Self {
        Self { providers }
    }

    /// Provider names in the order they are tried
    pub fn provider_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.name())
    }

    /// Resolve download links for `url`.
    ///
    /// A missing URL or one without `tiktok.com` is rejected before any
    /// provider is contacted. Each provider is attempted exactly once.
    pub async fn fetch(&self, url: Option<&str>) -> Result<DownloadPayload> {
        let url = url
            .filter(|u| is_tiktok_url(u))
            .ok_or_else(|| Error::InvalidInput(INVALID_URL_MESSAGE.to_string()))?;

        for provider in &self.providers {
            tracing::debug!(provider = provider.name(), url = %url, "Trying download provider");

            if let Some(payload) = provider.fetch(url).await {
                tracing::info!(provider = provider.name(), url = %url, "Download resolved");
                return Ok(payload);
            }
        }

        Err(Error::Upstream(EXHAUSTED_MESSAGE.to_string()))
    }
}
