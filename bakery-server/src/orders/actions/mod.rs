//! Order action implementations
//!
//! Each action implements [`ActionHandler`] and handles one lifecycle
//! event from the transition table.

use shared::models::Order;

use crate::orders::traits::{ActionHandler, OrderError};

mod accept_order;
mod add_extra_charge;
mod advance_status;
mod cancel_order;
mod reject_order;

pub use accept_order::AcceptOrderAction;
pub use add_extra_charge::AddExtraChargeAction;
pub use advance_status::AdvanceStatusAction;
pub use cancel_order::CancelOrderAction;
pub use reject_order::RejectOrderAction;

/// OrderAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum OrderAction {
    Accept(AcceptOrderAction),
    Reject(RejectOrderAction),
    Advance(AdvanceStatusAction),
    Cancel(CancelOrderAction),
    AddExtraCharge(AddExtraChargeAction),
}

impl ActionHandler for OrderAction {
    fn name(&self) -> &'static str {
        match self {
            OrderAction::Accept(action) => action.name(),
            OrderAction::Reject(action) => action.name(),
            OrderAction::Advance(action) => action.name(),
            OrderAction::Cancel(action) => action.name(),
            OrderAction::AddExtraCharge(action) => action.name(),
        }
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        match self {
            OrderAction::Accept(action) => action.apply(order),
            OrderAction::Reject(action) => action.apply(order),
            OrderAction::Advance(action) => action.apply(order),
            OrderAction::Cancel(action) => action.apply(order),
            OrderAction::AddExtraCharge(action) => action.apply(order),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_order(status: shared::order::OrderStatus) -> Order {
    use shared::models::PaymentType;

    Order {
        id: "ORD1".to_string(),
        cake_id: 2,
        cake_name: "Birthday Celebration".to_string(),
        cake_image: "https://example.com/b.png".to_string(),
        size: "0.5kg".to_string(),
        flavour: "Chocolate".to_string(),
        color: "Blue".to_string(),
        addons: Vec::new(),
        total_price: 800.0,
        customer_name: "Asha".to_string(),
        customer_phone: "9876543210".to_string(),
        delivery_address: "12 Baker Street".to_string(),
        delivery_date: "2099-12-31".to_string(),
        delivery_time: "18:00".to_string(),
        custom_message: None,
        special_instructions: None,
        payment_type: PaymentType::Cod,
        status,
        extra_charges: None,
        charge_description: None,
        rejection_reason: None,
        created_at: chrono::Utc::now(),
    }
}
