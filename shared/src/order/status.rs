//! Order status and dashboard buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// ```text
/// pending ──► accepted ──► preparing ──► ready ──► completed
///    │                                      └────► delivered
///    ├──► rejected   (worker, with reason)
///    └──► cancelled  (customer)
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Preparing,
    Ready,
    Completed,
    /// Synonym of `Completed` for delivered orders
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// No transition leaves a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Rejected | Self::Completed | Self::Delivered | Self::Cancelled
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard grouping of statuses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderBucket {
    /// Waiting for the worker's decision
    New,
    /// Accepted and not yet handed over
    InProcess,
    Completed,
    /// Rejected or cancelled
    Closed,
    #[default]
    All,
}

impl OrderBucket {
    pub fn contains(&self, status: OrderStatus) -> bool {
        match self {
            Self::New => status == OrderStatus::Pending,
            Self::InProcess => matches!(
                status,
                OrderStatus::Accepted | OrderStatus::Preparing | OrderStatus::Ready
            ),
            Self::Completed => matches!(status, OrderStatus::Completed | OrderStatus::Delivered),
            Self::Closed => matches!(status, OrderStatus::Rejected | OrderStatus::Cancelled),
            Self::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        let s: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(s, OrderStatus::Delivered);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        for status in OrderStatus::ALL {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status)
            );
        }
    }

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(OrderStatus::is_terminal)
            .collect();
        assert_eq!(
            terminal,
            vec![
                OrderStatus::Rejected,
                OrderStatus::Completed,
                OrderStatus::Delivered,
                OrderStatus::Cancelled
            ]
        );
    }

    #[test]
    fn test_buckets_partition_statuses() {
        let buckets = [
            OrderBucket::New,
            OrderBucket::InProcess,
            OrderBucket::Completed,
            OrderBucket::Closed,
        ];
        for status in OrderStatus::ALL {
            let hits = buckets.iter().filter(|b| b.contains(status)).count();
            assert_eq!(hits, 1, "{status} must be in exactly one bucket");
            assert!(OrderBucket::All.contains(status));
        }
        assert!(OrderBucket::InProcess.contains(OrderStatus::Ready));
    }

    #[test]
    fn test_bucket_serde() {
        let b: OrderBucket = serde_json::from_str("\"in_process\"").unwrap();
        assert_eq!(b, OrderBucket::InProcess);
    }
}
