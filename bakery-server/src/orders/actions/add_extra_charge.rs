//! AddExtraCharge action
//!
//! Worker raises the total by a positive amount. Allowed in any status;
//! totals only ever go up.

use shared::models::Order;
use shared::util::non_empty;

use crate::orders::money::{add_amount, validate_charge};
use crate::orders::traits::{ActionHandler, OrderError};
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

#[derive(Debug, Clone)]
pub struct AddExtraChargeAction {
    pub amount: f64,
    pub description: String,
}

impl ActionHandler for AddExtraChargeAction {
    fn name(&self) -> &'static str {
        "extra_charge"
    }

    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        validate_charge(self.amount)?;
        let description = non_empty(Some(self.description.as_str())).ok_or_else(|| {
            OrderError::InvalidExtraCharge("description must not be empty".to_string())
        })?;
        validate_required_text(description, "description", MAX_NOTE_LEN)?;

        order.total_price = add_amount(order.total_price, self.amount);
        order.extra_charges = Some(add_amount(
            order.extra_charges.unwrap_or_default(),
            self.amount,
        ));
        order.charge_description = Some(description.to_string());
        Ok(())
    }
}
