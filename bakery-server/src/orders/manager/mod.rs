//! OrdersManager - order placement and lifecycle actions
//!
//! # Action Flow
//!
//! ```text
//! execute(order_id, action)
//!     ├─ 1. Begin write transaction (store)
//!     ├─ 2. Load the order, apply the action to a copy
//!     ├─ 3. Guard failure → abort, order unchanged
//!     ├─ 4. Persist the copy and commit
//!     └─ 5. Log the transition
//! ```

mod error;


use chrono::Utc;
use shared::models::{Addon, Cake, Order};
use shared::order::{OrderQuery, OrderStatus, PlaceOrderRequest};
use shared::util::non_empty;

use super::actions::{
    AcceptOrderAction, AddExtraChargeAction, AdvanceStatusAction, CancelOrderAction, OrderAction,
    RejectOrderAction,
};
use super::money::{compute_total, select_addons};
use super::traits::{ActionHandler, OrderError};
use crate::db::repository::{AddonRepository, OrderRepository};
use crate::db::store::{Collection, CollectionStore};
use crate::utils::time::validate_delivery_date;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_phone, validate_required_text,
};

/// Order placement and lifecycle
#[derive(Clone)]
pub struct OrdersManager {
    store: CollectionStore,
    orders: OrderRepository,
    addons: AddonRepository,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager").finish_non_exhaustive()
    }
}

impl OrdersManager {
    pub fn new(store: CollectionStore) -> Self {
        Self {
            orders: OrderRepository::new(store.clone()),
            addons: AddonRepository::new(store.clone()),
            store,
        }
    }

    // ========== Queries ==========

    pub fn get(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)?
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// Worker dashboard listing
    pub fn list(&self, query: &OrderQuery) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.find_matching(query)?)
    }

    /// Customer tracking: orders placed with `phone`
    pub fn list_for_customer(
        &self,
        phone: &str,
        query: &OrderQuery,
    ) -> Result<Vec<Order>, OrderError> {
        validate_phone(phone)?;
        Ok(self.orders.find_by_customer(phone.trim(), query)?)
    }

    // ========== Placement ==========

    /// Validate the request, price it on the server and store a pending order
    pub fn place_order(&self, req: PlaceOrderRequest) -> Result<Order, OrderError> {
        validate_required_text(&req.customer_name, "customerName", MAX_NAME_LEN)?;
        validate_phone(&req.customer_phone)?;
        validate_required_text(&req.delivery_address, "deliveryAddress", MAX_ADDRESS_LEN)?;
        validate_required_text(&req.delivery_time, "deliveryTime", MAX_SHORT_TEXT_LEN)?;
        validate_delivery_date(&req.delivery_date)?;
        validate_optional_text(&req.custom_message, "customMessage", MAX_NOTE_LEN)?;
        validate_optional_text(&req.special_instructions, "specialInstructions", MAX_NOTE_LEN)?;

        let cake: Cake = self
            .store
            .find_by_id(Collection::Cakes, req.cake_id)?
            .ok_or(OrderError::CakeNotFound(req.cake_id))?;
        if !cake.is_available {
            return Err(OrderError::OptionUnavailable(format!(
                "{} is not available right now",
                cake.name
            )));
        }
        let size = cake.size(&req.size).ok_or_else(|| {
            OrderError::OptionUnavailable(format!("{} has no size '{}'", cake.name, req.size))
        })?;
        if !cake.offers_flavour(&req.flavour) {
            return Err(OrderError::OptionUnavailable(format!(
                "{} has no flavour '{}'",
                cake.name, req.flavour
            )));
        }
        if !cake.offers_color(&req.color) {
            return Err(OrderError::OptionUnavailable(format!(
                "{} has no color '{}'",
                cake.name, req.color
            )));
        }

        let catalog: Vec<Addon> = self.addons.find_available()?;
        let total_price = compute_total(size, &req.addon_ids, &catalog);
        let addons = select_addons(&req.addon_ids, &catalog);

        let draft = Order {
            id: String::new(),
            cake_id: cake.id,
            cake_name: cake.name.clone(),
            cake_image: cake.image.clone(),
            size: size.weight.clone(),
            flavour: req.flavour,
            color: req.color,
            addons,
            total_price,
            customer_name: req.customer_name.trim().to_string(),
            customer_phone: req.customer_phone.trim().to_string(),
            delivery_address: req.delivery_address.trim().to_string(),
            delivery_date: req.delivery_date.trim().to_string(),
            delivery_time: req.delivery_time.trim().to_string(),
            custom_message: non_empty(req.custom_message.as_deref()).map(str::to_string),
            special_instructions: non_empty(req.special_instructions.as_deref())
                .map(str::to_string),
            payment_type: req.payment_type,
            status: OrderStatus::Pending,
            extra_charges: None,
            charge_description: None,
            rejection_reason: None,
            created_at: Utc::now(),
        };

        let order = self.orders.insert(&draft)?;
        tracing::info!(
            order_id = %order.id,
            cake_id = order.cake_id,
            total = order.total_price,
            addons = order.addons.len(),
            "Order placed"
        );
        Ok(order)
    }

    // ========== Actions ==========

    /// Apply one action atomically; on failure the order is unchanged
    pub fn execute(&self, order_id: &str, action: OrderAction) -> Result<Order, OrderError> {
        let mut from = None;
        let result = self.orders.modify(order_id, |order: &mut Order| {
            from = Some(order.status);
            action.apply(order)
        });

        match result {
            Ok(Some(order)) => {
                tracing::info!(
                    order_id = %order.id,
                    action = action.name(),
                    from = %from.unwrap_or(order.status),
                    to = %order.status,
                    total = order.total_price,
                    "Order updated"
                );
                Ok(order)
            }
            Ok(None) => {
                tracing::warn!(order_id, action = action.name(), "Order not found");
                Err(OrderError::OrderNotFound(order_id.to_string()))
            }
            Err(OrderError::Storage(e)) => {
                tracing::error!(order_id, action = action.name(), error = %e, "Order update failed");
                Err(OrderError::Storage(e))
            }
            Err(e) => {
                tracing::warn!(order_id, action = action.name(), error = %e, "Order action rejected");
                Err(e)
            }
        }
    }

    pub fn accept(&self, order_id: &str) -> Result<Order, OrderError> {
        self.execute(order_id, OrderAction::Accept(AcceptOrderAction))
    }

    pub fn reject(&self, order_id: &str, reason: impl Into<String>) -> Result<Order, OrderError> {
        self.execute(
            order_id,
            OrderAction::Reject(RejectOrderAction {
                reason: reason.into(),
            }),
        )
    }

    pub fn advance(&self, order_id: &str, to: OrderStatus) -> Result<Order, OrderError> {
        self.execute(order_id, OrderAction::Advance(AdvanceStatusAction { to }))
    }

    pub fn add_extra_charge(
        &self,
        order_id: &str,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Order, OrderError> {
        self.execute(
            order_id,
            OrderAction::AddExtraCharge(AddExtraChargeAction {
                amount,
                description: description.into(),
            }),
        )
    }

    pub fn cancel(&self, order_id: &str, customer_phone: &str) -> Result<Order, OrderError> {
        self.execute(
            order_id,
            OrderAction::Cancel(CancelOrderAction {
                customer_phone: customer_phone.to_string(),
            }),
        )
    }
}
