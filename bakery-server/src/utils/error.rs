//! Error types
//!
//! Re-exports the unified error taxonomy from `shared::error` and maps the
//! storage layer onto it. Handlers return [`AppResult`]; the axum
//! `IntoResponse` impl on [`AppError`] renders the JSON body.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::store::StoreError;

/// Classify a storage error into an error code (clients localize the message)
fn classify_store_error(e: &StoreError) -> ErrorCode {
    match e {
        StoreError::Serialization(_) | StoreError::InvalidRecord(_) => {
            return ErrorCode::StorageCorrupted;
        }
        StoreError::Transaction(_) => return ErrorCode::SystemBusy,
        _ => {}
    }

    // redb errors are classified by message
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return ErrorCode::StorageFull;
    }
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }
    ErrorCode::DatabaseError
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = classify_store_error(&err);
        tracing::error!(error = %err, code = %code, "Storage failure");
        AppError::with_message(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::Collection;

    #[test]
    fn test_store_error_classification() {
        let err: AppError = StoreError::InvalidRecord(Collection::Orders).into();
        assert_eq!(err.code, ErrorCode::StorageCorrupted);
        assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = StoreError::Serialization(json_err).into();
        assert_eq!(err.code, ErrorCode::StorageCorrupted);
    }
}
