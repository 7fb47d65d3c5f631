//! Pizza Stub Server - mock pizza-service API.
//!
//! Serves the mocked REST surface against the standard fixture set. Intended
//! for pointing a pizza web frontend (or the load generator) at a
//! deterministic backend; each server process simulates one browser context.
//!
//! # Usage
//!
//! ```bash
//! PIZZA_STUB_PORT=3001 pizza-stubd
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizza_stub_server::config::StubConfig;
use pizza_stub_server::state::AppState;
use pizza_stub_server::store::FixtureStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StubConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pizza_stub_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // One fixture store per process: one simulated browser context
    let state = AppState::new(FixtureStore::standard());
    let app = pizza_stub_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("pizza-stubd listening on {}", addr);

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
