//! Order endpoints
//!
//! Customer side: [`place`](OrdersClient::place), [`track`](OrdersClient::track),
//! [`cancel`](OrdersClient::cancel). Everything else is the worker dashboard.

use shared::models::Order;
use shared::order::{
    CancelOrderRequest, ExtraChargeRequest, OrderBucket, OrderQuery, OrderStatus,
    PlaceOrderRequest, RejectOrderRequest, UpdateStatusRequest,
};

use crate::{ClientResult, HttpClient};

const ORDERS: &str = "api/Orders";

#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: HttpClient,
}

impl OrdersClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ========== Customer ==========

    pub async fn place(&self, req: &PlaceOrderRequest) -> ClientResult<Order> {
        self.http.post(ORDERS, req).await
    }

    /// Orders placed with `phone`, optionally narrowed to one bucket
    pub async fn track(&self, phone: &str, bucket: Option<OrderBucket>) -> ClientResult<Vec<Order>> {
        let query = OrderQuery {
            bucket,
            status: None,
        };
        self.http
            .get_with_query(&format!("api/customers/{phone}/orders"), &query)
            .await
    }

    pub async fn cancel(&self, id: &str, customer_phone: &str) -> ClientResult<Order> {
        let body = CancelOrderRequest {
            customer_phone: customer_phone.to_string(),
        };
        self.http.post(&format!("{ORDERS}/{id}/cancel"), &body).await
    }

    // ========== Worker ==========

    pub async fn list(&self, query: &OrderQuery) -> ClientResult<Vec<Order>> {
        self.http.get_with_query(ORDERS, query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        self.http.get(&format!("{ORDERS}/{id}")).await
    }

    pub async fn accept(&self, id: &str) -> ClientResult<Order> {
        self.http.post_empty(&format!("{ORDERS}/{id}/accept")).await
    }

    pub async fn reject(&self, id: &str, reason: &str) -> ClientResult<Order> {
        let body = RejectOrderRequest {
            reason: reason.to_string(),
        };
        self.http.post(&format!("{ORDERS}/{id}/reject"), &body).await
    }

    pub async fn advance(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        let body = UpdateStatusRequest { status };
        self.http.post(&format!("{ORDERS}/{id}/status"), &body).await
    }

    pub async fn add_extra_charge(
        &self,
        id: &str,
        amount: f64,
        description: &str,
    ) -> ClientResult<Order> {
        let body = ExtraChargeRequest {
            amount,
            description: description.to_string(),
        };
        self.http
            .post(&format!("{ORDERS}/{id}/extra-charges"), &body)
            .await
    }
}
