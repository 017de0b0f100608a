//! Order endpoints under `/api/orders`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use stockroom_core::{OrderNo, Page};

use super::PageParams;
use crate::error::AppError;
use crate::models::{ApiResponse, OrderInput, OrderWithItem};
use crate::services;
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route(
            "/api/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<OrderWithItem>>>, AppError> {
    let page = services::orders::list(state.pool(), params.page, params.size).await?;
    Ok(Json(ApiResponse::success(
        "Orders retrieved successfully",
        200,
        page,
    )))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OrderWithItem>>, AppError> {
    let order = services::orders::get(state.pool(), &OrderNo::from_raw(id)).await?;
    Ok(Json(ApiResponse::success("Order found", 200, order)))
}

async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<OrderInput>,
) -> Result<(StatusCode, Json<ApiResponse<OrderWithItem>>), AppError> {
    body.validate()?;
    let order = services::orders::create(state.pool(), body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Order created successfully",
            201,
            order,
        )),
    ))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OrderInput>,
) -> Result<Json<ApiResponse<OrderWithItem>>, AppError> {
    body.validate()?;
    let order = services::orders::update(state.pool(), &OrderNo::from_raw(id), body).await?;
    Ok(Json(ApiResponse::success(
        "Order updated successfully",
        200,
        order,
    )))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<services::orders::DeletedOrder>>, AppError> {
    let confirmation = services::orders::delete(state.pool(), &OrderNo::from_raw(id)).await?;
    Ok(Json(ApiResponse::success(
        "Order deleted successfully",
        200,
        confirmation,
    )))
}
