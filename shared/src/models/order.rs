//! Order Model
//!
//! An order snapshots everything it needs from the catalog at submission
//! time. Later catalog edits never change an existing order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Addon;
use crate::order::OrderStatus;

/// How the customer pays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentType {
    /// Cash on delivery
    #[default]
    #[serde(rename = "COD")]
    Cod,
    Online,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `ORD<sequence>`
    pub id: String,

    // === Cake snapshot ===
    /// Cake id at order time (informational, not a reference)
    pub cake_id: i64,
    pub cake_name: String,
    pub cake_image: String,
    /// Selected size weight label
    pub size: String,
    pub flavour: String,
    pub color: String,
    /// Selected add-ons, copied from the catalog
    #[serde(default)]
    pub addons: Vec<Addon>,
    pub total_price: f64,

    // === Customer ===
    pub customer_name: String,
    /// Doubles as the customer's identity
    pub customer_phone: String,
    pub delivery_address: String,
    pub delivery_date: String,
    pub delivery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub payment_type: PaymentType,

    // === Lifecycle ===
    pub status: OrderStatus,
    /// Sum of all worker-applied extra charges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_charges: Option<f64>,
    /// Description of the latest extra charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Immutable once set
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Whether `phone` identifies the customer who placed this order
    pub fn belongs_to(&self, phone: &str) -> bool {
        self.customer_phone == phone.trim()
    }
}
