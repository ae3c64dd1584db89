//! Worker transition table
//!
//! ```text
//! pending ──accept──► accepted ──► preparing ──► ready ──► completed | delivered
//! ```
//!
//! Rejection and cancellation leave `pending` through their own actions,
//! since both carry extra guards.

use shared::order::OrderStatus;

/// Statuses a worker may move an order to from `from`
pub fn next_statuses(from: OrderStatus) -> &'static [OrderStatus] {
    match from {
        OrderStatus::Pending => &[OrderStatus::Accepted],
        OrderStatus::Accepted => &[OrderStatus::Preparing],
        OrderStatus::Preparing => &[OrderStatus::Ready],
        OrderStatus::Ready => &[OrderStatus::Completed, OrderStatus::Delivered],
        OrderStatus::Rejected
        | OrderStatus::Completed
        | OrderStatus::Delivered
        | OrderStatus::Cancelled => &[],
    }
}

pub fn can_advance(from: OrderStatus, to: OrderStatus) -> bool {
    next_statuses(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        assert!(can_advance(OrderStatus::Pending, OrderStatus::Accepted));
        assert!(can_advance(OrderStatus::Accepted, OrderStatus::Preparing));
        assert!(can_advance(OrderStatus::Preparing, OrderStatus::Ready));
        assert!(can_advance(OrderStatus::Ready, OrderStatus::Completed));
        assert!(can_advance(OrderStatus::Ready, OrderStatus::Delivered));
    }

    #[test]
    fn test_no_backward_or_skipping_moves() {
        assert!(!can_advance(OrderStatus::Ready, OrderStatus::Accepted));
        assert!(!can_advance(OrderStatus::Pending, OrderStatus::Preparing));
        assert!(!can_advance(OrderStatus::Accepted, OrderStatus::Completed));
        assert!(!can_advance(OrderStatus::Pending, OrderStatus::Rejected));
        assert!(!can_advance(OrderStatus::Pending, OrderStatus::Cancelled));
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for status in OrderStatus::ALL {
            assert_eq!(status.is_terminal(), next_statuses(status).is_empty());
        }
    }
}
