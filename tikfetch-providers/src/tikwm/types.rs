//! TikWM API types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct TikwmResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<TikwmVideo>,
}

/// Video data as returned by TikWM.
///
/// Fields are kept as raw JSON: `author` is an object, the rest are usually
/// strings, and any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TikwmVideo {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub author: Value,
    /// Cover image URL
    #[serde(default)]
    pub cover: Value,
    /// No-watermark video URL
    #[serde(default)]
    pub play: Value,
    /// Watermarked video URL
    #[serde(default)]
    pub wmplay: Value,
    /// Background music URL
    #[serde(default)]
    pub music: Value,
}
