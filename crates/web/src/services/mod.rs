//! Clients for the two upstream HTTP JSON services.
//!
//! The order and customer services are opaque collaborators reached over
//! plain REST. Both follow the same error payload convention on non-2xx
//! responses: a JSON body with an `error` string, or an `errors` array
//! joined with a comma, or - as last resort - the HTTP status reason.

pub mod customers;
pub mod directory;
pub mod orders;

pub use customers::CustomerClient;
pub use directory::{Clock, CustomerDirectory, CustomerSource, SystemClock};
pub use orders::OrderClient;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when calling an upstream service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-2xx response; `message` follows the error
    /// payload convention and is shown to the user verbatim.
    #[error("{message}")]
    Upstream { status: u16, message: String },
}

/// Turn an upstream response into `T`, applying the shared error payload
/// convention on non-2xx statuses.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_owned());
        return Err(ServiceError::Upstream {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

/// Extract the error message from an upstream error body, if it follows
/// the convention.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
        return Some(message.to_owned());
    }
    let errors = value.get("errors")?.as_array()?;
    let joined = errors
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error": "Customer not found"}"#),
            Some("Customer not found".to_owned())
        );
    }

    #[test]
    fn joins_errors_array() {
        assert_eq!(
            extract_error_message(r#"{"errors": ["Price too high", "Quantity invalid"]}"#),
            Some("Price too high, Quantity invalid".to_owned())
        );
    }

    #[test]
    fn error_field_wins_over_errors_array() {
        assert_eq!(
            extract_error_message(r#"{"error": "boom", "errors": ["ignored"]}"#),
            Some("boom".to_owned())
        );
    }

    #[test]
    fn falls_through_on_unconventional_bodies() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"errors": []}"#), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn upstream_error_displays_message_only() {
        let err = ServiceError::Upstream {
            status: 422,
            message: "La cantidad no es válida".to_owned(),
        };
        assert_eq!(err.to_string(), "La cantidad no es válida");
    }
}
