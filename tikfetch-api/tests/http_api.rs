//! End-to-end tests for the HTTP surface
//!
//! Upstream APIs are replaced by a single wiremock server; every route is
//! driven through the real router.
//!
//! Run with: cargo test -p tikfetch-api --test http_api

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tikfetch_api::create_router;
use tikfetch_core::{bootstrap::init_services, Config};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO: &str = "https://www.tiktok.com/@someone/video/7301234567890";
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../public");

/// Router whose upstreams all point at `server`
fn app(server: &MockServer) -> Router {
    let mut config = Config::default();
    config.upstream.tiklydown_base_url = server.uri();
    config.upstream.tikwm_base_url = server.uri();
    config.upstream.oembed_base_url = server.uri();
    config.upstream.timeout_seconds = 5;

    let services = init_services(&config).expect("services should build");
    create_router(services, STATIC_DIR)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec();
    (status, headers, body)
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, req).await;
    let json = serde_json::from_slice(&body).expect("body should be JSON");
    (status, json)
}

fn post_download(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/download")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn mount_primary(server: &MockServer, response: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_secondary(server: &MockServer, response: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

// ------------------------------------------------------------------
// /api/download
// ------------------------------------------------------------------

#[tokio::test]
async fn download_rejects_non_tiktok_url_without_upstream_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(&server);

    for body in [
        json!({ "url": "https://www.youtube.com/watch?v=1" }),
        json!({ "url": "" }),
        json!({}),
    ] {
        let (status, json) = send_json(&app, post_download(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid TikTok URL" }));
    }
}

#[tokio::test]
async fn download_rejects_unreadable_body() {
    let server = MockServer::start().await;
    let app = app(&server);

    let req = Request::builder()
        .method("POST")
        .uri("/api/download")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid TikTok URL");
}

#[tokio::test]
async fn download_uses_primary_payload_verbatim() {
    let server = MockServer::start().await;
    let primary = json!({
        "id": 7301234567890_u64,
        "title": "a video",
        "video": { "noWatermark": "https://cdn/nowm.mp4" }
    });
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .and(query_param("url", VIDEO))
        .respond_with(ResponseTemplate::new(200).set_body_json(primary))
        .expect(1)
        .mount(&server)
        .await;
    mount_secondary(&server, ResponseTemplate::new(200), 0).await;
    let app = app(&server);

    let (status, json) = send_json(&app, post_download(json!({ "url": VIDEO }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "id": 7301234567890_u64,
            "title": "a video",
            "video": { "noWatermark": "https://cdn/nowm.mp4" }
        })
    );
}

#[tokio::test]
async fn download_lets_payload_success_key_win() {
    let server = MockServer::start().await;
    mount_primary(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "success": false, "x": 1 })),
        1,
    )
    .await;
    mount_secondary(&server, ResponseTemplate::new(200), 0).await;
    let app = app(&server);

    let (status, json) = send_json(&app, post_download(json!({ "url": VIDEO }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": false, "x": 1 }));
}

#[tokio::test]
async fn download_falls_back_to_secondary() {
    let server = MockServer::start().await;
    mount_primary(&server, ResponseTemplate::new(500), 1).await;
    mount_secondary(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "success",
            "data": {
                "id": "7301234567890",
                "title": "a video",
                "author": { "unique_id": "someone" },
                "cover": "https://cdn/cover.jpg",
                "play": "https://cdn/play.mp4",
                "wmplay": "https://cdn/wmplay.mp4",
                "music": "https://cdn/music.mp3",
                "duration": 12
            }
        })),
        1,
    )
    .await;
    let app = app(&server);

    let (status, json) = send_json(&app, post_download(json!({ "url": VIDEO }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "title": "a video",
            "author": { "unique_id": "someone" },
            "thumbnail": "https://cdn/cover.jpg",
            "hd": "https://cdn/play.mp4",
            "watermarked": "https://cdn/wmplay.mp4",
            "audio": "https://cdn/music.mp3"
        })
    );
}

#[tokio::test]
async fn download_treats_empty_primary_body_as_miss() {
    let server = MockServer::start().await;
    mount_primary(&server, ResponseTemplate::new(200).set_body_json(json!({})), 1).await;
    mount_secondary(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": { "title": "t" } })),
        1,
    )
    .await;
    let app = app(&server);

    let (status, json) = send_json(&app, post_download(json!({ "url": VIDEO }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "t");
    assert!(json["hd"].is_null());
}

#[tokio::test]
async fn download_fails_when_all_providers_fail() {
    let server = MockServer::start().await;
    mount_primary(&server, ResponseTemplate::new(503), 1).await;
    mount_secondary(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "code": -1, "msg": "Url parsing is failed!" })),
        1,
    )
    .await;
    let app = app(&server);

    let (status, json) = send_json(&app, post_download(json!({ "url": VIDEO }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({
            "success": false,
            "error": "Failed to process video",
            "message": "Failed to fetch video"
        })
    );
}

// ------------------------------------------------------------------
// /api/video-info
// ------------------------------------------------------------------

#[tokio::test]
async fn video_info_wraps_oembed_document() {
    let server = MockServer::start().await;
    let doc = json!({ "version": "1.0", "type": "video", "title": "hello" });
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", "https://www.tiktok.com/@tiktok/video/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc.clone()))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server);

    let (status, json) = send_json(
        &app,
        get("/api/video-info?url=https%3A%2F%2Fwww.tiktok.com%2F%40x%2Fvideo%2F12345"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true, "data": doc }));
}

#[tokio::test]
async fn video_info_rejects_url_without_id() {
    let server = MockServer::start().await;
    let app = app(&server);

    for uri in [
        "/api/video-info?url=https%3A%2F%2Fwww.tiktok.com%2F%40x",
        "/api/video-info",
    ] {
        let (status, json) = send_json(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid video ID" }));
    }
}

#[tokio::test]
async fn video_info_rejects_unreadable_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(&server);

    let (status, headers, body) = send(&app, get("/api/video-info?url=a&url=b")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "error": "Invalid video ID" }));
}

#[tokio::test]
async fn video_info_hides_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;
    let app = app(&server);

    let (status, json) = send_json(&app, get("/api/video-info?url=/video/1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to fetch video info" }));
}

// ------------------------------------------------------------------
// /api/direct-download
// ------------------------------------------------------------------

#[tokio::test]
async fn direct_download_redirects_to_proxy() {
    let server = MockServer::start().await;
    let app = app(&server);

    let (status, headers, _) = send(
        &app,
        get("/api/direct-download?url=https%3A%2F%2Fwww.tiktok.com%2F%40x%2Fvideo%2F1&quality=sd"),
    )
    .await;
    assert_eq!(status, StatusCode::FOUND);
    let location = headers[header::LOCATION].to_str().unwrap();
    assert!(location.contains("url=https%3A%2F%2Fwww.tiktok.com%2F%40x%2Fvideo%2F1"));
    assert!(location.ends_with("&quality=sd"));
}

#[tokio::test]
async fn direct_download_defaults_to_hd() {
    let server = MockServer::start().await;
    let app = app(&server);

    let (status, headers, _) = send(&app, get("/api/direct-download?url=x")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        headers[header::LOCATION],
        "https://cors-proxy.example.com/?url=x&quality=hd"
    );
}

#[tokio::test]
async fn direct_download_treats_unreadable_query_as_missing_url() {
    let server = MockServer::start().await;
    let app = app(&server);

    let (status, headers, _) = send(&app, get("/api/direct-download?url=a&url=b&quality=sd")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        headers[header::LOCATION],
        "https://cors-proxy.example.com/?url=&quality=hd"
    );
}

// ------------------------------------------------------------------
// Ambient routes
// ------------------------------------------------------------------

#[tokio::test]
async fn health_check() {
    let server = MockServer::start().await;
    let app = app(&server);

    let (status, json) = send_json(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok", "providers": ["tiklydown", "tikwm"] }));
}

#[tokio::test]
async fn serves_static_front_end() {
    let server = MockServer::start().await;
    let app = app(&server);

    let (status, headers, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("/api/download"));

    let (status, _, _) = send(&app, get("/missing.txt")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = MockServer::start().await;
    let app = app(&server);

    let req = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://somewhere.example")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, req).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
