//! Category API

use axum::Router;
use shared::CatalogEntity;
use shared::models::Category;

use super::catalog;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(&format!("/api/{}", Category::RESOURCE), catalog::routes::<Category>())
}
