//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("{0}")]
    Api(AppError),

    /// Non-2xx response without a readable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: http::StatusCode, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-side error code, if the server sent one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

/// Lets the HTTP adapter stand in for a local store
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api(e) => e,
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, e.to_string())
            }
            ClientError::Http(e) => AppError::network(e.to_string()),
            ClientError::Status { status, body } => {
                AppError::with_message(ErrorCode::Unknown, format!("{status}: {body}"))
            }
            ClientError::Serialization(e) => AppError::invalid_request(e.to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
