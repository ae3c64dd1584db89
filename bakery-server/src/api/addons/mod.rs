//! Add-on API

use axum::Router;
use shared::CatalogEntity;
use shared::models::Addon;

use super::catalog;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(&format!("/api/{}", Addon::RESOURCE), catalog::routes::<Addon>())
}
