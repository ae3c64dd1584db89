//! Request payloads for order actions

use serde::{Deserialize, Serialize};

use super::{OrderBucket, OrderStatus};
use crate::models::PaymentType;

/// Customer order submission
///
/// The server resolves the cake and add-ons and computes the total; the
/// client never sends a price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub cake_id: i64,
    /// Weight label of the selected size
    pub size: String,
    pub flavour: String,
    pub color: String,
    /// Selected add-on ids; duplicates collapse, unknown ids are skipped
    #[serde(default)]
    pub addon_ids: Vec<i64>,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub delivery_date: String,
    pub delivery_time: String,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub payment_type: PaymentType,
}

/// Worker rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectOrderRequest {
    pub reason: String,
}

/// Worker status advance (accepted → preparing → ready → completed/delivered)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Worker extra charge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraChargeRequest {
    pub amount: f64,
    pub description: String,
}

/// Customer cancellation; the phone number is the customer's identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub customer_phone: String,
}

/// Order list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<OrderBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    pub fn matches(&self, status: OrderStatus) -> bool {
        self.bucket.unwrap_or_default().contains(status)
            && self.status.is_none_or(|s| s == status)
    }
}
