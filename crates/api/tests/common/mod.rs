//! Shared helpers for integration tests.
//!
//! Builds the full application router with the production middleware stack
//! over a temp-file catalog, plus small request/response helpers.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::NamedTempFile;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use tienda_api::config::ServerConfig;
use tienda_api::routes;
use tienda_api::state::AppState;
use tienda_api::ws::WsManager;
use tienda_events::EventBus;
use tienda_store::CatalogStore;

/// A test application together with the handles tests poke at directly.
pub struct TestApp {
    pub app: Router,
    pub event_bus: Arc<EventBus>,
    pub ws_manager: Arc<WsManager>,
    /// Keeps the catalog document alive (and reachable) for the test.
    pub file: NamedTempFile,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(products_file: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        products_file: products_file.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a temp-file catalog seeded with
/// `seed`.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The event broadcaster task is not
/// spawned; tests that need fan-out spawn it themselves.
pub fn build_test_app(seed: &[serde_json::Value]) -> TestApp {
    let file = NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), serde_json::to_string_pretty(seed).expect("seed json"))
        .expect("seed catalog");

    let path = file.path().to_str().expect("utf8 temp path").to_string();
    let config = test_config(&path);
    let store = Arc::new(CatalogStore::new(file.path()));
    let ws_manager = Arc::new(WsManager::new());
    let event_bus = Arc::new(EventBus::default());

    let state = AppState {
        store,
        config: Arc::new(config),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().expect("origin")])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::root_routes())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestApp {
        app,
        event_bus,
        ws_manager,
        file,
    }
}

/// A full product JSON value for seeding the catalog document.
pub fn seed_product(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("Description of {title}"),
        "code": format!("P-{id:03}"),
        "price": 10.0 * id as f64,
        "status": true,
        "stock": 5,
        "category": "",
        "thumbnails": [],
    })
}

/// A valid create payload with all required fields.
pub fn valid_create_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Yerba mate",
        "description": "1kg bag",
        "code": "YM-001",
        "price": 1250.0,
        "stock": 40,
    })
}

/// Read the raw catalog document back from disk.
pub fn read_catalog(test: &TestApp) -> serde_json::Value {
    let data = std::fs::read_to_string(test.file.path()).expect("read catalog");
    serde_json::from_str(&data).expect("parse catalog")
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
