//! Shared types for the bakery storefront
//!
//! Common types used by `bakery-server` and `bakery-client`: catalog and
//! order models, the unified error taxonomy, and the catalog capability
//! interface both the local store adapter and the HTTP adapter implement.

pub mod catalog;
pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use catalog::{CatalogEntity, CatalogStore};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
