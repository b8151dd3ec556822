//! Customer service client.

use std::future::Future;

use pedidos_core::Customer;

use super::directory::CustomerSource;
use super::{ServiceError, handle_response};

/// Client for the customer service REST API.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    client: reqwest::Client,
    base_url: String,
}

impl CustomerClient {
    /// Create a client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_owned(),
        }
    }

    /// Fetch the full customer list.
    ///
    /// `GET {base}/api/v1/customers`
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or a non-2xx response.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let url = format!("{}/api/v1/customers", self.base_url);
        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }
}

impl CustomerSource for CustomerClient {
    fn list_customers(
        &self,
    ) -> impl Future<Output = Result<Vec<Customer>, ServiceError>> + Send {
        Self::list_customers(self)
    }
}
