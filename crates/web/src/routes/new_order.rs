//! Order creation route handlers.
//!
//! The price field is a masked text input driven by HTMX: every edit posts
//! the raw value to the keystroke fragment endpoint, which returns the
//! re-masked `<input>`; leaving the field posts to the blur endpoint, which
//! snaps it to the canonical rendering. Validation happens again on submit,
//! so the mask is polish, not a trust boundary.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use pedidos_core::{Customer, NewOrder, OrderStatus, OrderValidationError};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Raw form fields, kept as strings so a failed submit re-renders exactly
/// what the user typed.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub status: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            product_name: String::new(),
            quantity: "1".to_owned(),
            price: String::new(),
            status: OrderStatus::default().as_str().to_owned(),
        }
    }
}

/// Order creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/new.html")]
pub struct NewOrderTemplate {
    pub customers: Vec<Customer>,
    pub statuses: &'static [OrderStatus],
    pub form: OrderForm,
    pub error: Option<String>,
}

/// Price input fragment template (HTMX target).
#[derive(Template, WebTemplate)]
#[template(path = "orders/price_input.html")]
pub struct PriceInputTemplate {
    pub price: String,
}

/// Price field payload for the fragment endpoints.
#[derive(Debug, Deserialize)]
pub struct PriceForm {
    #[serde(default)]
    pub price: String,
}

/// Display the order creation form.
#[instrument(skip(state))]
pub async fn form(State(state): State<AppState>) -> NewOrderTemplate {
    render_form(&state, OrderForm::default(), None).await
}

/// Create an order.
///
/// Validates locally first - nothing goes over the wire when a field is
/// out of bounds - then posts to the order service and redirects to the
/// listing. Upstream errors re-render the form with the extracted message
/// so the user can correct and retry.
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<OrderForm>) -> Response {
    let price = state.price_format().parse(&form.price);
    let draft = NewOrder {
        customer_id: form.customer_id.trim().parse().unwrap_or(0),
        product_name: form.product_name.trim().to_owned(),
        quantity: form.quantity.trim().parse().unwrap_or(0),
        price,
        status: form.status.parse().unwrap_or_default(),
    };

    // An empty field gets its own message; parse() turning garbage into 0
    // is covered by the non-positive check inside validate().
    let validation = if form.price.trim().is_empty() {
        Err(OrderValidationError::MissingPrice)
    } else {
        draft.validate()
    };
    if let Err(e) = validation {
        tracing::debug!(error = %e, "order rejected locally");
        return render_form(&state, form, Some(e.to_string()))
            .await
            .into_response();
    }

    match state.orders().create_order(&draft).await {
        Ok(order) => {
            tracing::info!(order_id = order.id, customer_id = order.customer_id, "order created");
            Redirect::to("/orders?created=1").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "order creation failed upstream");
            render_form(&state, form, Some(e.to_string()))
                .await
                .into_response()
        }
    }
}

/// Re-mask the price field after an edit (HTMX fragment).
pub async fn price_keystroke(
    State(state): State<AppState>,
    Form(form): Form<PriceForm>,
) -> PriceInputTemplate {
    PriceInputTemplate {
        price: state.price_format().on_keystroke(&form.price),
    }
}

/// Finalize the price field when it loses focus (HTMX fragment).
pub async fn price_blur(
    State(state): State<AppState>,
    Form(form): Form<PriceForm>,
) -> PriceInputTemplate {
    PriceInputTemplate {
        price: state.price_format().on_blur(&form.price),
    }
}

/// Build the form template, loading the customer select from the
/// directory cache. A validation or upstream error takes precedence over
/// a customer-list error in the banner.
async fn render_form(
    state: &AppState,
    form: OrderForm,
    error: Option<String>,
) -> NewOrderTemplate {
    let mut error = error;
    let customers = match state.customers().get().await {
        Ok(customers) => customers.to_vec(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load customer list");
            error.get_or_insert(e.to_string());
            Vec::new()
        }
    };
    NewOrderTemplate {
        customers,
        statuses: &OrderStatus::ALL,
        form,
        error,
    }
}
