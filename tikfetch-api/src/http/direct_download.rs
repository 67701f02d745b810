//! GET /api/direct-download

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tikfetch_core::direct::DEFAULT_QUALITY;

use crate::http::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct DirectDownloadQuery {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}

/// Redirect (302) to a directly downloadable URL.
///
/// An unreadable query string counts as a missing `url`.
pub async fn direct_download(
    State(state): State<AppState>,
    query: Result<Query<DirectDownloadQuery>, QueryRejection>,
) -> AppResult<Response> {
    let (url, quality) = match query {
        Ok(Query(query)) => (query.url.unwrap_or_default(), query.quality),
        Err(rejection) => {
            tracing::debug!("Unreadable direct-download query: {}", rejection);
            (String::new(), None)
        }
    };
    let quality = quality.as_deref().unwrap_or(DEFAULT_QUALITY);

    match state.direct_resolver.resolve(&url, quality).await {
        Ok(Some(location)) => {
            tracing::debug!(quality = %quality, "Redirecting to {}", location);
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Ok(None) => Err(AppError::not_found("Video not found")),
        Err(e) => {
            tracing::error!("Direct download error: {}", e);
            Err(AppError::internal("Download failed"))
        }
    }
}
