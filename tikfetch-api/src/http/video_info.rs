//! GET /api/video-info

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tikfetch_core::video_info::INVALID_ID_MESSAGE;
use tikfetch_core::Error;

use crate::http::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct VideoInfoQuery {
    #[serde(default)]
    pub url: Option<String>,
}

/// Look up oEmbed metadata for the video id in `url`.
pub async fn video_info(
    State(state): State<AppState>,
    query: Result<Query<VideoInfoQuery>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Unreadable video-info query: {}", rejection);
        AppError::bad_request(INVALID_ID_MESSAGE)
    })?;

    match state.video_info.fetch(query.url.as_deref()).await {
        Ok(data) => Ok(Json(json!({ "success": true, "data": data }))),
        Err(Error::InvalidInput(msg)) => Err(AppError::bad_request(msg)),
        Err(e) => {
            tracing::error!("Video info error: {}", e);
            Err(AppError::internal("Failed to fetch video info"))
        }
    }
}
