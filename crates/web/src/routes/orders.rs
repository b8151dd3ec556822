//! Order listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use pedidos_core::{Customer, Order};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Orders shown per page.
pub const PER_PAGE: u32 = 20;

/// Query parameters for the listing.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub customer_id: Option<i64>,
    pub page: Option<u32>,
    /// Set by the redirect after a successful creation.
    pub created: Option<String>,
}

/// Order listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub customers: Vec<Customer>,
    /// Selected customer id, `0` when none is selected.
    pub selected: i64,
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    /// 1-based range of the rows shown, for "Mostrando X-Y de Z".
    pub from: u64,
    pub to: u64,
    pub prev_page: u32,
    pub next_page: u32,
    pub created: bool,
    pub error: Option<String>,
}

/// Display the order listing, filtered by customer and paginated.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> OrdersTemplate {
    let mut error = None;

    let customers = match state.customers().get().await {
        Ok(customers) => customers.to_vec(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load customer list");
            error = Some(e.to_string());
            Vec::new()
        }
    };

    let selected = query.customer_id.unwrap_or(0).max(0);
    let page = query.page.unwrap_or(1).max(1);

    let mut orders = Vec::new();
    let mut total = 0;
    if selected > 0 {
        match state.orders().list_orders(selected, page, PER_PAGE).await {
            Ok(listing) => {
                total = listing.total;
                orders = listing.orders;
            }
            Err(e) => {
                tracing::error!(error = %e, customer_id = selected, "failed to load orders");
                error.get_or_insert(e.to_string());
            }
        }
    }

    let total_pages =
        u32::try_from(total.div_ceil(u64::from(PER_PAGE))).unwrap_or(u32::MAX);
    let from = if orders.is_empty() {
        0
    } else {
        u64::from(page - 1) * u64::from(PER_PAGE) + 1
    };
    let to = (u64::from(page) * u64::from(PER_PAGE)).min(total);

    OrdersTemplate {
        customers,
        selected,
        orders,
        total,
        page,
        total_pages,
        from,
        to,
        prev_page: page.saturating_sub(1).max(1),
        next_page: page.saturating_add(1).min(total_pages.max(1)),
        created: query.created.is_some(),
        error,
    }
}
