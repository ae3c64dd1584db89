//! AdvanceStatus action
//!
//! Worker moves an order one step along the transition table.

use shared::models::Order;
use shared::order::OrderStatus;

use crate::orders::traits::{ActionHandler, OrderError};
use crate::orders::transitions::can_advance;

#[derive(Debug, Clone)]
pub struct AdvanceStatusAction {
    pub to: OrderStatus,
}

impl ActionHandler for AdvanceStatusAction {
    fn name(&self) -> &'static str {
        "advance"
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        if !can_advance(order.status, self.to) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: self.to,
            });
        }
        order.status = self.to;
        Ok(())
    }
}
