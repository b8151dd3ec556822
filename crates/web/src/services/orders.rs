//! Order service client.

use pedidos_core::{NewOrder, Order, OrdersPage};

use super::{ServiceError, handle_response};

/// Client for the order service REST API.
#[derive(Debug, Clone)]
pub struct OrderClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    /// Create a client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_owned(),
        }
    }

    /// Fetch one page of a customer's orders.
    ///
    /// `GET {base}/api/v1/orders?customer_id&page&per_page`
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or a non-2xx response.
    pub async fn list_orders(
        &self,
        customer_id: i64,
        page: u32,
        per_page: u32,
    ) -> Result<OrdersPage, ServiceError> {
        let url = format!("{}/api/v1/orders", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("customer_id", customer_id.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;
        handle_response(response).await
    }

    /// Create an order.
    ///
    /// `POST {base}/api/v1/orders` with the `{ "order": { ... } }` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or a non-2xx response;
    /// upstream validation messages surface through the error payload
    /// convention.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ServiceError> {
        let url = format!("{}/api/v1/orders", self.base_url);
        let body = serde_json::json!({ "order": order });
        let response = self.client.post(&url).json(&body).send().await?;
        handle_response(response).await
    }
}
