//! Order status enumeration and Spanish display labels.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of order statuses accepted on creation.
///
/// Wire format is the lowercase name (`"pending"`, `"shipped"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the form offers them.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Spanish display label.
    #[must_use]
    pub const fn label_es(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Processing => "En proceso",
            Self::Shipped => "Enviado",
            Self::Delivered => "Entregado",
            Self::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a status outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Spanish label for a status string coming from upstream.
///
/// Upstream orders can carry statuses outside the fixed set; those display
/// verbatim rather than breaking the listing.
#[must_use]
pub fn status_label(status: &str) -> &str {
    match status.parse::<OrderStatus>() {
        Ok(known) => known.label_es(),
        Err(_) => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_wire_names() {
        assert_eq!(status_label("pending"), "Pendiente");
        assert_eq!(status_label("processing"), "En proceso");
        assert_eq!(status_label("shipped"), "Enviado");
        assert_eq!(status_label("delivered"), "Entregado");
        assert_eq!(status_label("cancelled"), "Cancelado");
    }

    #[test]
    fn unknown_status_displays_verbatim() {
        assert_eq!(status_label("on_hold"), "on_hold");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn parse_round_trips() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Processing).expect("serialize");
        assert_eq!(json, "\"processing\"");
        let back: OrderStatus = serde_json::from_str("\"cancelled\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
