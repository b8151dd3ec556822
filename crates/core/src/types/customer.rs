//! Customer record as served by the customer service.

use serde::{Deserialize, Serialize};

/// A customer, as listed by `GET /api/v1/customers`.
///
/// The upstream record carries more fields; only the ones the front-end
/// uses are modeled, and unknown fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub customer_name: String,
}
