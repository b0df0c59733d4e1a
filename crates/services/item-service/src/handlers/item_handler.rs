//! Item CRUD handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use common::{AppError, AppResult, ValidatedJson};
use domain::Item;

use crate::state::AppState;

/// Deletion acknowledgment body.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAck {
    /// Human-readable confirmation
    #[schema(example = "Item deleted")]
    pub detail: String,
}

/// Create item routes.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/openapi.json", get(openapi_json))
}

/// Serve this service's own OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}

/// Item path identifiers must be positive.
fn require_positive(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation("Item ID must be a positive integer"));
    }
    Ok(())
}

/// Add a new item
#[utoipa::path(
    post,
    path = "/items/",
    tag = "Items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, description = "Duplicate identifier or validation error")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> AppResult<Json<Item>> {
    let item = state.items.create_item(item).await?;
    Ok(Json(item))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// Get a specific item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID, must be positive")
    ),
    responses(
        (status = 200, description = "The matching item", body = Item),
        (status = 400, description = "Non-positive identifier"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    require_positive(id)?;
    let item = state.items.get_item(id).await?;
    Ok(Json(item))
}

/// Update an item by ID
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "The replacement item", body = Item),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> AppResult<Json<Item>> {
    let item = state.items.update_item(id, item).await?;
    Ok(Json(item))
}

/// Remove an item by ID
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = DeleteAck),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteAck>> {
    state.items.delete_item(id).await?;
    Ok(Json(DeleteAck {
        detail: "Item deleted".to_string(),
    }))
}
