//! List item endpoints
//!
//! Items are not persisted yet. These handlers accept the request shape
//! and echo the list id without touching storage. They are only mounted
//! when `ServerConfig::item_routes` is set.

use axum::{routing::put, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ListId};
use crate::models::{List, ListItem};

/// PUT /lists/{id}/addItem
async fn add_item(
    ListId(id): ListId,
    JsonBody(item): JsonBody<ListItem>,
) -> Result<Json<List>, ApiError> {
    tracing::debug!(list = id, item = item.id, "add item (not persisted)");
    Ok(Json(List::with_id(id)))
}

/// PUT /lists/{id}/RemoveItem
async fn remove_item(ListId(id): ListId) -> Result<Json<List>, ApiError> {
    tracing::debug!(list = id, "remove item (not persisted)");
    Ok(Json(List::with_id(id)))
}

/// PUT /listitems/{id}
async fn update_item(
    ListId(id): ListId,
    JsonBody(item): JsonBody<ListItem>,
) -> Result<Json<List>, ApiError> {
    tracing::debug!(id, checked = item.checked, "update item (not persisted)");
    Ok(Json(List::with_id(id)))
}

/// Item routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/lists/{id}/addItem", put(add_item))
        .route("/lists/{id}/RemoveItem", put(remove_item))
        .route("/listitems/{id}", put(update_item))
}
