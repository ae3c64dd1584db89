use shared::error::{AppError, ErrorCode};

use super::super::traits::OrderError;

/// Map lifecycle errors onto the unified error codes
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
                    .with_detail("orderId", id)
            }
            OrderError::CakeNotFound(id) => {
                AppError::with_message(ErrorCode::CakeNotFound, format!("Cake {id} not found"))
                    .with_detail("cakeId", id)
            }
            OrderError::InvalidTransition { from, to } => AppError::with_message(
                ErrorCode::OrderInvalidTransition,
                format!("Cannot move order from {from} to {to}"),
            )
            .with_detail("from", from.as_str())
            .with_detail("to", to.as_str()),
            OrderError::NotCancellable(status) => AppError::new(ErrorCode::OrderNotCancellable)
                .with_detail("status", status.as_str()),
            OrderError::RejectionReasonRequired => {
                AppError::new(ErrorCode::RejectionReasonRequired).with_detail("field", "reason")
            }
            OrderError::InvalidExtraCharge(msg) => {
                AppError::with_message(ErrorCode::InvalidExtraCharge, msg)
            }
            OrderError::PermissionDenied(msg) => AppError::permission_denied(msg),
            OrderError::OptionUnavailable(msg) => {
                AppError::with_message(ErrorCode::OrderOptionUnavailable, msg)
            }
            OrderError::Validation(e) => e,
            OrderError::Storage(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use shared::order::OrderStatus;

    #[test]
    fn test_guard_failures_map_to_conflict() {
        let err: AppError = OrderError::NotCancellable(OrderStatus::Accepted).into();
        assert_eq!(err.code, ErrorCode::OrderNotCancellable);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
        assert_eq!(err.details.unwrap()["status"], "accepted");

        let err: AppError = OrderError::InvalidTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Accepted,
        }
        .into();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);
        assert_eq!(err.message, "Cannot move order from ready to accepted");
    }

    #[test]
    fn test_client_errors() {
        let err: AppError = OrderError::RejectionReasonRequired.into();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err: AppError = OrderError::PermissionDenied("nope".into()).into();
        assert_eq!(err.http_status(), StatusCode::FORBIDDEN);

        let err: AppError = OrderError::OrderNotFound("ORD9".into()).into();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }
}
