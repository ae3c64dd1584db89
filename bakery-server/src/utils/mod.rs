//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] (from shared::error) and storage error mapping
//! - Logging setup
//! - Input validation and date helpers

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
