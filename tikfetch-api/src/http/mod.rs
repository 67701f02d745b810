// Module: http
// HTTP/JSON API plus the static front-end

pub mod direct_download;
pub mod download;
pub mod error;
pub mod health;
pub mod video_info;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tikfetch_core::bootstrap::Services;
use tikfetch_core::direct::DirectUrlResolver;
use tikfetch_core::provider::DownloadChain;
use tikfetch_core::video_info::VideoInfoService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub download_chain: Arc<DownloadChain>,
    pub video_info: Arc<VideoInfoService>,
    pub direct_resolver: Arc<dyn DirectUrlResolver>,
}

impl From<Services> for AppState {
    fn from(services: Services) -> Self {
        Self {
            download_chain: services.download_chain,
            video_info: services.video_info,
            direct_resolver: services.direct_resolver,
        }
    }
}

/// Create the HTTP router with all routes
///
/// Anything not matched by an API route is served from `static_dir`.
pub fn create_router(state: impl Into<AppState>, static_dir: &str) -> Router {
    Router::new()
        .merge(health::create_health_router())
        .route("/api/download", post(download::download))
        .route("/api/video-info", get(video_info::video_info))
        .route(
            "/api/direct-download",
            get(direct_download::direct_download),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        // Apply state to all routes (must be last)
        .with_state(state.into())
}
