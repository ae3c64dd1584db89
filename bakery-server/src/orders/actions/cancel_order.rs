//! CancelOrder action
//!
//! Customer-initiated pending → cancelled. The caller proves ownership with
//! the phone number the order was placed with.

use shared::models::Order;
use shared::order::OrderStatus;

use crate::orders::traits::{ActionHandler, OrderError};

#[derive(Debug, Clone)]
pub struct CancelOrderAction {
    pub customer_phone: String,
}

impl ActionHandler for CancelOrderAction {
    fn name(&self) -> &'static str {
        "cancel"
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        if !order.belongs_to(&self.customer_phone) {
            return Err(OrderError::PermissionDenied(format!(
                "Order {} was not placed with this phone number",
                order.id
            )));
        }
        if order.status != OrderStatus::Pending {
            return Err(OrderError::NotCancellable(order.status));
        }
        order.status = OrderStatus::Cancelled;
        Ok(())
    }
}
