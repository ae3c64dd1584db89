//! Bakery Client - typed HTTP access to a bakery server
//!
//! - [`HttpCatalog`]: the HTTP adapter for [`shared::CatalogStore`]
//! - [`OrdersClient`]: customer and worker order endpoints
//!
//! ```ignore
//! let http = HttpClient::new(&ClientConfig::new("http://localhost:5000"))?;
//! let cakes = HttpCatalog::<Cake>::new(http.clone()).list().await?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod orders;

pub use catalog::HttpCatalog;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use crate::http::HttpClient;
pub use orders::OrdersClient;

// Re-export shared types for convenience
pub use shared::{ApiResponse, AppError, AppResult, CatalogEntity, CatalogStore, ErrorCode};
