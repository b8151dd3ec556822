//! Custom Askama template filters.

use std::fmt::Display;
use std::str::FromStr;

use pedidos_core::PriceFormat;
use rust_decimal::Decimal;

/// Renders an amount as COP currency: `$ 1.234,50`.
///
/// Usage in templates: `{{ order.price|cop }}`
#[askama::filter_fn]
pub fn cop(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let amount = Decimal::from_str(&value.to_string()).unwrap_or_default();
    Ok(PriceFormat::es_co().format_currency(amount))
}

/// Spanish label for an order status; unknown statuses pass through.
///
/// Usage in templates: `{{ order.status|status_label }}`
#[askama::filter_fn]
pub fn status_label(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(pedidos_core::status_label(&raw).to_owned())
}

/// Groups the digits of a non-negative integer: `1234567` -> `1.234.567`.
///
/// Usage in templates: `{{ total|miles }}`
#[askama::filter_fn]
pub fn miles(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && c.is_ascii_digit() {
            out.push('.');
        }
        out.push(c);
    }
    Ok(out)
}
