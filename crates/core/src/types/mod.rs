//! Core types for Pedidos.

pub mod customer;
pub mod order;
pub mod price;
pub mod status;

pub use customer::Customer;
pub use order::{
    MAX_PRODUCT_NAME, MAX_QUANTITY, NewOrder, Order, OrderValidationError, OrdersPage,
};
pub use price::{LocaleSeparators, MAX_PRICE, PriceFormat};
pub use status::{OrderStatus, UnknownStatus, status_label};
