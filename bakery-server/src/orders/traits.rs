//! Order action trait and errors

use shared::error::AppError;
use shared::models::Order;
use shared::order::OrderStatus;
use thiserror::Error;

use crate::db::repository::RepoError;
use crate::db::store::StoreError;

/// Order lifecycle errors
///
/// Every variant except `Storage` is a guard failure: the order was left
/// exactly as it was.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cake not found: {0}")]
    CakeNotFound(i64),

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Only pending orders can be cancelled (order is {0})")]
    NotCancellable(OrderStatus),

    #[error("A rejection reason is required")]
    RejectionReasonRequired,

    #[error("Invalid extra charge: {0}")]
    InvalidExtraCharge(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    OptionUnavailable(String),

    #[error(transparent)]
    Validation(#[from] AppError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Store(e) => OrderError::Storage(e),
            other => OrderError::Validation(other.into()),
        }
    }
}

/// A single order mutation
///
/// `apply` runs against a copy of the stored order inside the store's write
/// transaction; the copy is persisted only if `apply` returns `Ok`.
pub trait ActionHandler {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn apply(&self, order: &mut Order) -> Result<(), OrderError>;
}
