//! Application state shared across handlers.

use std::sync::Arc;

use pedidos_core::PriceFormat;

use crate::config::WebConfig;
use crate::services::{CustomerClient, CustomerDirectory, OrderClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the upstream service clients, and the one customer
/// directory cache instance for the application lifetime.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    orders: OrderClient,
    customers: CustomerDirectory<CustomerClient>,
    price_format: PriceFormat,
}

impl AppState {
    /// Create the application state from configuration.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        let orders = OrderClient::new(&config.order_service_url);
        let customers =
            CustomerDirectory::new(CustomerClient::new(&config.customer_service_url));
        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                customers,
                price_format: PriceFormat::es_co(),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the order service client.
    #[must_use]
    pub fn orders(&self) -> &OrderClient {
        &self.inner.orders
    }

    /// Get a reference to the customer directory cache.
    #[must_use]
    pub fn customers(&self) -> &CustomerDirectory<CustomerClient> {
        &self.inner.customers
    }

    /// Get a reference to the price formatter (es-CO locale).
    #[must_use]
    pub fn price_format(&self) -> &PriceFormat {
        &self.inner.price_format
    }
}
