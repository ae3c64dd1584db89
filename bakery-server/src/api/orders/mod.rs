//! Order API
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/Orders | GET | Dashboard listing (`?bucket=&status=`) |
//! | /api/Orders | POST | Place an order |
//! | /api/Orders/{id} | GET | Read one order |
//! | /api/Orders/{id}/accept | POST | Worker accept |
//! | /api/Orders/{id}/reject | POST | Worker reject with reason |
//! | /api/Orders/{id}/status | POST | Worker advance |
//! | /api/Orders/{id}/extra-charges | POST | Worker extra charge |
//! | /api/Orders/{id}/cancel | POST | Customer cancel |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/Orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::place))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/accept", post(handler::accept))
        .route("/{id}/reject", post(handler::reject))
        .route("/{id}/status", post(handler::advance))
        .route("/{id}/extra-charges", post(handler::add_extra_charge))
        .route("/{id}/cancel", post(handler::cancel))
}
