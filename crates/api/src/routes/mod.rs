pub mod health;
pub mod pages;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /products              list (GET, ?limit= truncates), create (POST)
/// /products/{pid}        get (GET), update (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}

/// Routes mounted at the server root: the rendered listing pages and the
/// WebSocket endpoint.
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .route("/ws", axum::routing::get(crate::ws::ws_handler))
}
