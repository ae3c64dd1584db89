//! AcceptOrder action
//!
//! pending → accepted.

use shared::models::Order;
use shared::order::OrderStatus;

use crate::orders::traits::{ActionHandler, OrderError};

#[derive(Debug, Clone, Default)]
pub struct AcceptOrderAction;

impl ActionHandler for AcceptOrderAction {
    fn name(&self) -> &'static str {
        "accept"
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        if order.status != OrderStatus::Pending {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Accepted,
            });
        }
        order.status = OrderStatus::Accepted;
        Ok(())
    }
}
