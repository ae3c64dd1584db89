//! Order Repository
//!
//! Orders are appended once and then only mutated through
//! [`OrderRepository::modify`]; they are never removed.

use shared::models::Order;
use shared::order::OrderQuery;

use super::RepoResult;
use crate::db::store::{Collection, CollectionStore, StoreError};

#[derive(Clone)]
pub struct OrderRepository {
    store: CollectionStore,
}

impl OrderRepository {
    pub fn new(store: CollectionStore) -> Self {
        Self { store }
    }

    /// All orders, newest first
    pub fn find_all(&self) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.store.get_all(Collection::Orders)?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Orders matching the bucket/status filters, newest first
    pub fn find_matching(&self, query: &OrderQuery) -> RepoResult<Vec<Order>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|o| query.matches(o.status))
            .collect())
    }

    /// A customer's orders (phone number as identity), newest first
    pub fn find_by_customer(&self, phone: &str, query: &OrderQuery) -> RepoResult<Vec<Order>> {
        Ok(self
            .find_matching(query)?
            .into_iter()
            .filter(|o| o.belongs_to(phone))
            .collect())
    }

    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        Ok(self.store.find_by_id(Collection::Orders, id)?)
    }

    /// Append a new order; the store assigns the `ORD` id
    pub fn insert(&self, draft: &Order) -> RepoResult<Order> {
        Ok(self.store.add(Collection::Orders, draft)?)
    }

    /// Atomically apply `f` to the stored order
    ///
    /// Returns `Ok(None)` if the order does not exist. When `f` fails the
    /// stored order is left unchanged.
    pub fn modify<E, F>(&self, id: &str, f: F) -> Result<Option<Order>, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut Order) -> Result<(), E>,
    {
        self.store.modify(Collection::Orders, id, f)
    }
}
