//! Customer order tracking
//!
//! The phone number is the customer's identity; there is no login.

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Order;
use shared::order::OrderQuery;

use crate::api::{ApiPath, ApiQuery};
use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/customers/{phone}/orders", get(list_orders))
}

/// GET /api/customers/{phone}/orders?bucket=
pub async fn list_orders(
    State(state): State<ServerState>,
    ApiPath(phone): ApiPath<String>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list_for_customer(&phone, &query)?))
}
