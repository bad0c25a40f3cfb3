use crate::error::{ApiError, ErrorResponse};
use crate::handlers::{parse_body, path_id};
use crate::models::{CreateItemRequest, Item, ItemPatch};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::RawPathParams, extract::State, http::StatusCode, Json};

/// GET /items handler - List all items in insertion order
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_items_handler(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.store.list_items();
    tracing::debug!("Listed {} items", items.len());
    Json(items)
}

/// POST /items handler - Create an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing name or invalid JSON", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let request: CreateItemRequest = parse_body(&body)?;
    let item = state.store.create_item(request)?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Numeric item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item_handler(
    State(state): State<AppState>,
    params: RawPathParams,
) -> Result<Json<Item>, ApiError> {
    let id = path_id(&params)?;

    match state.store.get_item(id) {
        Ok(item) => Ok(Json(item)),
        Err(err) => {
            tracing::debug!("Item not found with id: {}", id);
            Err(err.into())
        }
    }
}

/// PUT /items/{id} handler - Merge fields onto an existing item
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Numeric item id")
    ),
    request_body = ItemPatch,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Missing name or invalid JSON", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item_handler(
    State(state): State<AppState>,
    params: RawPathParams,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let id = path_id(&params)?;
    let patch: ItemPatch = parse_body(&body)?;
    let item = state.store.update_item(id, patch)?;

    tracing::info!("Updated item with id: {}", id);
    Ok(Json(item))
}

/// DELETE /items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Numeric item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    params: RawPathParams,
) -> Result<StatusCode, ApiError> {
    let id = path_id(&params)?;
    state.store.delete_item(id)?;

    tracing::info!("Deleted item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
