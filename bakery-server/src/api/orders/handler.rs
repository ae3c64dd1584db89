//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::Order;
use shared::order::{
    CancelOrderRequest, ExtraChargeRequest, OrderQuery, PlaceOrderRequest, RejectOrderRequest,
    UpdateStatusRequest,
};

use crate::api::{ApiJson, ApiPath, ApiQuery};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/Orders?bucket=&status=
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list(&query)?))
}

/// GET /api/Orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}

/// POST /api/Orders - priced on the server, stored as pending
pub async fn place(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PlaceOrderRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.place_order(payload)?))
}

/// POST /api/Orders/{id}/accept
pub async fn accept(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.accept(&id)?))
}

/// POST /api/Orders/{id}/reject
pub async fn reject(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<RejectOrderRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.reject(&id, payload.reason)?))
}

/// POST /api/Orders/{id}/status
pub async fn advance(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.advance(&id, payload.status)?))
}

/// POST /api/Orders/{id}/extra-charges
pub async fn add_extra_charge(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<ExtraChargeRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.add_extra_charge(
        &id,
        payload.amount,
        payload.description,
    )?))
}

/// POST /api/Orders/{id}/cancel - customer side, phone must match
pub async fn cancel(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<CancelOrderRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.cancel(&id, &payload.customer_phone)?))
}
