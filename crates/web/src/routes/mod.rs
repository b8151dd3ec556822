//! HTTP route handlers for the front-end.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Home page
//! GET  /health                - Health check
//!
//! # Orders
//! GET  /orders                - Order listing (customer filter + pagination)
//! GET  /orders/new            - Order creation form
//! POST /orders/new            - Create order
//! POST /orders/new/price      - Price input mask fragment (HTMX, per edit)
//! POST /orders/new/price/blur - Price input finalize fragment (HTMX)
//! ```

pub mod home;
pub mod new_order;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health))
        .route("/orders", get(orders::index))
        .route("/orders/new", get(new_order::form).post(new_order::create))
        .route("/orders/new/price", post(new_order::price_keystroke))
        .route("/orders/new/price/blur", post(new_order::price_blur))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
