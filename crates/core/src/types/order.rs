//! Order records and creation payload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::MAX_PRICE;
use super::status::OrderStatus;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME: usize = 200;

/// Maximum quantity per order.
pub const MAX_QUANTITY: u32 = 999_999;

/// An order, as returned by the order service.
///
/// `price` travels as a decimal string on the wire; `status` stays a plain
/// string because upstream may return values outside [`OrderStatus`], which
/// the listing displays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub product_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the order listing:
/// `GET /api/v1/orders?customer_id&page&per_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Payload for `POST /api/v1/orders` (the inner `order` object).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub status: OrderStatus,
}

/// Client-side validation failures, with the user-facing Spanish message
/// as the `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("Selecciona un cliente.")]
    MissingCustomer,
    #[error("El producto es obligatorio.")]
    MissingProduct,
    #[error("El producto no puede superar 200 caracteres.")]
    ProductTooLong,
    #[error("La cantidad debe estar entre 1 y 999.999.")]
    QuantityOutOfRange,
    #[error("El precio es obligatorio.")]
    MissingPrice,
    #[error("El precio debe ser mayor que 0.")]
    PriceNotPositive,
    #[error("El precio no puede superar 999.999.999,99.")]
    PriceTooHigh,
}

impl NewOrder {
    /// Check the field bounds before anything goes over the wire.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, in the order the form presents the
    /// fields: customer, product name, quantity, price.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.customer_id < 1 {
            return Err(OrderValidationError::MissingCustomer);
        }
        if self.product_name.trim().is_empty() {
            return Err(OrderValidationError::MissingProduct);
        }
        if self.product_name.chars().count() > MAX_PRODUCT_NAME {
            return Err(OrderValidationError::ProductTooLong);
        }
        if self.quantity < 1 || self.quantity > MAX_QUANTITY {
            return Err(OrderValidationError::QuantityOutOfRange);
        }
        if self.price > MAX_PRICE {
            return Err(OrderValidationError::PriceTooHigh);
        }
        if self.price <= Decimal::ZERO {
            return Err(OrderValidationError::PriceNotPositive);
        }
        Ok(())
    }
}
