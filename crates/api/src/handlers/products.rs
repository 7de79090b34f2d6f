//! Handlers for the `/api/products` resource.
//!
//! Mutations go through the catalog store's unified operations; on success
//! the resulting record is published on the event bus so connected realtime
//! clients hear about it, in addition to being returned in the response
//! body.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use tienda_core::error::CoreError;
use tienda_core::product::{NewProduct, Product, ProductPatch};
use tienda_core::types::ProductId;
use tienda_events::CatalogEvent;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Truncate the listing to the first `limit` items, in stored order.
    /// Zero or negative values mean no limit.
    pub limit: Option<i64>,
}

/// Coerce a path parameter to a product id.
///
/// Ids are integers; a value that does not parse cannot match any stored
/// record, so it maps straight to "not found" rather than a 400.
fn parse_pid(pid: &str) -> Result<ProductId, CoreError> {
    pid.parse().map_err(|_| CoreError::NotFound {
        entity: "product",
        id: pid.to_string(),
    })
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.store.list_limited(query.limit).await?;
    Ok(Json(products))
}

/// GET /api/products/{pid}
pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_pid(&pid)?;

    let product = state.store.get(id).await?.ok_or(CoreError::NotFound {
        entity: "product",
        id: pid,
    })?;

    Ok(Json(product))
}

/// POST /api/products
///
/// Creates a product through the same unified add operation the realtime
/// channel uses. Returns the created record and broadcasts `productAdded`.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> AppResult<Json<Product>> {
    let product = state.store.add(input).await?;

    tracing::info!(id = product.id, title = %product.title, "Product created");
    state
        .event_bus
        .publish(CatalogEvent::ProductAdded(product.clone()));

    Ok(Json(product))
}

/// PUT /api/products/{pid}
///
/// Shallow-merges the body over the stored record. Returns the updated
/// record and broadcasts `productUpdated`; 404 when no record matches.
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> AppResult<Json<Product>> {
    let id = parse_pid(&pid)?;

    let product = state
        .store
        .update(id, patch)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "product",
            id: pid,
        })?;

    tracing::info!(id = product.id, "Product updated");
    state
        .event_bus
        .publish(CatalogEvent::ProductUpdated(product.clone()));

    Ok(Json(product))
}
