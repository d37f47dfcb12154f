//! Shopping list endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ListId};
use crate::models::{List, ListBody, ValidationError};
use crate::state::AppState;

/// GET /lists - active lists created inside the index window
async fn list_index(State(state): State<AppState>) -> Result<Json<Vec<List>>, ApiError> {
    let since = state.index_cutoff(Utc::now());
    let lists = state.store().index(since).await?;

    tracing::debug!(count = lists.len(), %since, "listed shopping lists");
    Ok(Json(lists.into_iter().map(List::from).collect()))
}

/// POST /lists - create a list from its description
async fn create_list(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ListBody>,
) -> Result<Json<List>, ApiError> {
    let list = state.store().create(&body.description).await?;

    tracing::info!(id = list.id, "created shopping list");
    Ok(Json(List::from(list)))
}

/// GET /lists/{id} - a single active list
async fn get_list(
    State(state): State<AppState>,
    ListId(id): ListId,
) -> Result<Json<List>, ApiError> {
    let list = state.store().get(id).await?;
    Ok(Json(List::from(list)))
}

/// PUT /lists/{id} - replace the description
async fn update_list(
    State(state): State<AppState>,
    ListId(id): ListId,
    JsonBody(body): JsonBody<ListBody>,
) -> Result<Json<List>, ApiError> {
    if let Some(body_id) = body.id {
        if body_id != id {
            return Err(ValidationError::Mismatch {
                field: "id",
                expected: id.to_string(),
                found: body_id.to_string(),
            }
            .into());
        }
    }

    let list = state.store().update(id, &body.description).await?;

    tracing::info!(id, "updated shopping list");
    Ok(Json(List::from(list)))
}

/// DELETE /lists/{id} - soft delete, 200 whether or not the list exists
async fn delete_list(
    State(state): State<AppState>,
    ListId(id): ListId,
) -> Result<StatusCode, ApiError> {
    let affected = state.store().delete(id).await?;

    tracing::info!(id, affected, "soft-deleted shopping list");
    Ok(StatusCode::OK)
}

/// List routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_index).post(create_list))
        .route(
            "/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
}
