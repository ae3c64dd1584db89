//! HTTP API
//!
//! # Structure
//!
//! - [`health`] - status check
//! - [`extract`] - extractors that reject with an `ApiResponse` body
//! - [`catalog`] - handlers shared by every catalog resource
//! - [`cakes`] - cake catalog, filterable by category
//! - [`categories`] - cake categories
//! - [`addons`] - add-on catalog
//! - [`orders`] - order placement and worker actions
//! - [`customers`] - customer order tracking

pub mod catalog;
pub mod extract;
pub mod health;

// Catalog
pub mod addons;
pub mod cakes;
pub mod categories;

// Orders
pub mod customers;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
pub use extract::{ApiJson, ApiPath, ApiQuery};
