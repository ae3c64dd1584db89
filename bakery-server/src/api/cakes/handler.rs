//! Cake API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::models::Cake;

use crate::api::ApiQuery;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct CakeListQuery {
    /// Category name tag; `all` or absent lists every cake
    pub category: Option<String>,
}

/// GET /api/Cakes?category=
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<CakeListQuery>,
) -> AppResult<Json<Vec<Cake>>> {
    let repo = state.cakes();
    let cakes = match query.category.as_deref() {
        Some(category) => repo.find_by_category(category)?,
        None => repo.find_all()?,
    };
    Ok(Json(cakes))
}
