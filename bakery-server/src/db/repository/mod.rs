//! Repository Module
//!
//! Typed CRUD over the collection store. The catalog repositories are the
//! local-store implementation of [`shared::CatalogStore`].

pub mod addon;
pub mod cake;
pub mod category;
pub mod order;

// Re-exports
pub use addon::AddonRepository;
pub use cake::CakeRepository;
pub use category::CategoryRepository;
pub use order::OrderRepository;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::store::StoreError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{1}")]
    NotFound(ErrorCode, String),

    #[error("{1}")]
    Duplicate(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(AppError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<AppError> for RepoError {
    fn from(err: AppError) -> Self {
        RepoError::Validation(err)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(code, msg) | RepoError::Duplicate(code, msg) => {
                AppError::with_message(code, msg)
            }
            RepoError::Validation(e) => e,
            RepoError::Store(e) => e.into(),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
