//! Item endpoints under `/api/items`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use stockroom_core::{ItemId, Page};

use super::PageParams;
use crate::error::AppError;
use crate::models::{ApiResponse, CreateItemInput, Item, UpdateItemInput};
use crate::services;
use crate::state::AppState;

/// Build the items router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<Item>>>, AppError> {
    let page = services::items::list(state.pool(), params.page, params.size).await?;
    Ok(Json(ApiResponse::success(
        "Items retrieved successfully",
        200,
        page,
    )))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Item>>, AppError> {
    let item = services::items::get(state.pool(), ItemId::new(id)).await?;
    Ok(Json(ApiResponse::success("Item found", 200, item)))
}

async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItemInput>,
) -> Result<(StatusCode, Json<ApiResponse<Item>>), AppError> {
    body.validate()?;
    let item = services::items::create(state.pool(), body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Item created successfully", 201, item)),
    ))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateItemInput>,
) -> Result<Json<ApiResponse<Item>>, AppError> {
    body.validate()?;
    let item = services::items::update(state.pool(), ItemId::new(id), body).await?;
    Ok(Json(ApiResponse::success(
        "Item updated successfully",
        200,
        item,
    )))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<services::items::DeletedItem>>, AppError> {
    let confirmation = services::items::delete(state.pool(), ItemId::new(id)).await?;
    Ok(Json(ApiResponse::success(
        "Item deleted successfully",
        200,
        confirmation,
    )))
}
