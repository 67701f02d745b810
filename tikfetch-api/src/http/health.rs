//! GET /health

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::http::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Reports liveness and the download providers in the order they are tried.
/// Upstreams are not contacted.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let providers: Vec<&str> = state.download_chain.provider_names().collect();
    Json(json!({ "status": "ok", "providers": providers }))
}
