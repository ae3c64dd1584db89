//! Health check route
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/status | GET | Version and storage check |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "collections": 4, "uptimeSeconds": 12 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/status", get(status))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// Number of collections present in the store
    #[serde(skip_serializing_if = "Option::is_none")]
    collections: Option<u64>,
    uptime_seconds: u64,
}

static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// GET /api/status
pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    let collections = match state.store.initialized_count() {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Status check could not read the store");
            None
        }
    };

    Json(StatusResponse {
        status: if collections.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        collections,
        uptime_seconds: uptime_seconds(),
    })
}
