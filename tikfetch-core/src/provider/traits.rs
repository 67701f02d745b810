// Download Provider Traits

use async_trait::async_trait;
use serde_json::{Map, Value};

/// JSON object merged into the `/api/download` response
pub type DownloadPayload = Map<String, Value>;

/// A single upstream that can turn a TikTok URL into download links.
///
/// Implementations never fail: transport errors, bad statuses and unusable
/// bodies all come back as `None` so the chain can move on.
#[async_trait]
pub trait DownloadProvider: Send + Sync {
    /// Provider name used in logs (e.g., "tiklydown", "tikwm")
    fn name(&self) -> &'static str;

    async fn fetch(&self, url: &str) -> Option<DownloadPayload>;
}

/// Accept a raw upstream body as a payload.
///
/// Only non-empty JSON objects qualify; `null`, scalars, arrays and `{}`
/// count as nothing.
#[must_use]
pub fn payload_from_value(value: Value) -> Option<DownloadPayload> {
    match value {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}
