//! RejectOrder action
//!
//! pending → rejected, with a mandatory reason.

use shared::models::Order;
use shared::order::OrderStatus;
use shared::util::non_empty;

use crate::orders::traits::{ActionHandler, OrderError};
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

#[derive(Debug, Clone)]
pub struct RejectOrderAction {
    pub reason: String,
}

impl ActionHandler for RejectOrderAction {
    fn name(&self) -> &'static str {
        "reject"
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        let reason =
            non_empty(Some(self.reason.as_str())).ok_or(OrderError::RejectionReasonRequired)?;
        validate_required_text(reason, "reason", MAX_NOTE_LEN)?;
        if order.status != OrderStatus::Pending {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Rejected,
            });
        }
        order.status = OrderStatus::Rejected;
        order.rejection_reason = Some(reason.to_string());
        Ok(())
    }
}
