//! Shared order lifecycle types
//!
//! - [`OrderStatus`] and the dashboard [`OrderBucket`] views
//! - Request payloads for customer and worker order actions

pub mod status;
pub mod types;

pub use status::{OrderBucket, OrderStatus};
pub use types::{
    CancelOrderRequest, ExtraChargeRequest, OrderQuery, PlaceOrderRequest, RejectOrderRequest,
    UpdateStatusRequest,
};
