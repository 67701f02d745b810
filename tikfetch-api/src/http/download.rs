//! POST /api/download

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use tikfetch_core::Error;

use crate::http::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Resolve download links, falling back across providers.
///
/// Responds `{ "success": true, ...payload }`. A missing or unreadable
/// body is treated the same as a missing URL.
pub async fn download(
    State(state): State<AppState>,
    body: Result<Json<DownloadRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let url = match body {
        Ok(Json(req)) => req.url,
        Err(rejection) => {
            tracing::debug!("Unreadable download request: {}", rejection);
            None
        }
    };

    match state.download_chain.fetch(url.as_deref()).await {
        Ok(payload) => {
            let mut response = Map::new();
            response.insert("success".to_string(), Value::Bool(true));
            // payload keys override, like an object spread
            response.extend(payload);
            Ok(Json(Value::Object(response)))
        }
        Err(Error::InvalidInput(msg)) => Err(AppError::bad_request(msg)),
        Err(e) => {
            tracing::error!("Download error: {}", e);
            Err(AppError::internal("Failed to process video")
                .with_detail(e.message())
                .unsuccessful())
        }
    }
}
