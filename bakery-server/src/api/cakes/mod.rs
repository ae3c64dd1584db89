//! Cake API
//!
//! Same routes as the other catalog resources, except that the listing
//! takes an optional `?category=` filter.

mod handler;

use axum::{Router, routing::get};
use shared::CatalogEntity;
use shared::models::Cake;

use super::catalog;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(&format!("/api/{}", Cake::RESOURCE), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(catalog::create::<Cake>))
        .route(
            "/{id}",
            get(catalog::get_by_id::<Cake>)
                .put(catalog::update::<Cake>)
                .delete(catalog::delete::<Cake>),
        )
}
