//! Route definitions for the server-rendered listing pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the server root.
///
/// ```text
/// GET    /                   -> home (static listing)
/// GET    /realtimeproducts   -> realtime (listing + live updates)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/realtimeproducts", get(pages::realtime))
}
