use axum::Json;
use serde_json::json;

/// GET /health
///
/// Liveness probe; does not touch the catalog document.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
