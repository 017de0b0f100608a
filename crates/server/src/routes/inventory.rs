//! Inventory movement endpoints under `/api/inventory`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use stockroom_core::{MovementId, Page};

use super::PageParams;
use crate::error::AppError;
use crate::models::{ApiResponse, MovementInput, MovementWithItem};
use crate::services;
use crate::state::AppState;

/// Build the inventory router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/inventory", get(list_movements).post(create_movement))
        .route(
            "/api/inventory/{id}",
            get(get_movement).put(update_movement).delete(delete_movement),
        )
}

async fn list_movements(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<MovementWithItem>>>, AppError> {
    let page = services::inventory::list(state.pool(), params.page, params.size).await?;
    Ok(Json(ApiResponse::success(
        "Inventory retrieved successfully",
        200,
        page,
    )))
}

async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MovementWithItem>>, AppError> {
    let movement = services::inventory::get(state.pool(), MovementId::new(id)).await?;
    Ok(Json(ApiResponse::success("Inventory found", 200, movement)))
}

async fn create_movement(
    State(state): State<AppState>,
    Json(body): Json<MovementInput>,
) -> Result<(StatusCode, Json<ApiResponse<MovementWithItem>>), AppError> {
    body.validate()?;
    let movement = services::inventory::create(state.pool(), body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Inventory created successfully",
            201,
            movement,
        )),
    ))
}

async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MovementInput>,
) -> Result<Json<ApiResponse<MovementWithItem>>, AppError> {
    body.validate()?;
    let movement = services::inventory::update(state.pool(), MovementId::new(id), body).await?;
    Ok(Json(ApiResponse::success(
        "Inventory updated successfully",
        200,
        movement,
    )))
}

async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<services::inventory::DeletedMovement>>, AppError> {
    let confirmation = services::inventory::delete(state.pool(), MovementId::new(id)).await?;
    Ok(Json(ApiResponse::success(
        "Inventory deleted successfully",
        200,
        confirmation,
    )))
}
