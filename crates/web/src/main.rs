//! Pedidos - Order management front-end.
//!
//! Serves the home page, the paginated order listing, and the order
//! creation form, backed by two upstream HTTP JSON services (orders and
//! customers) configured via environment variables.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for the price input mask
//! - Askama templates for server-side rendering
//! - reqwest clients to the order and customer services
//! - In-process TTL cache for the customer directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use pedidos_web::config::WebConfig;
use pedidos_web::routes;
use pedidos_web::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info level for our
    // crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pedidos_web=info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env().expect("Failed to load configuration");
    tracing::info!(
        order_service = %config.order_service_url,
        customer_service = %config.customer_service_url,
        "configuration loaded"
    );

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = routes::router(state);

    tracing::info!("pedidos-web listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
