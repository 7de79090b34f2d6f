//! Route definitions for the `/api/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/api/products`.
///
/// ```text
/// GET    /          -> list_products (?limit= truncates)
/// POST   /          -> create_product
/// GET    /{pid}     -> get_product
/// PUT    /{pid}     -> update_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{pid}",
            get(products::get_product).put(products::update_product),
        )
}
