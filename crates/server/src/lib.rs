//! Pizza Stub Server - a mock pizza-service REST API.
//!
//! A deterministic stand-in for the pizza-service backend, used to test the
//! pizza web application in isolation. All state lives in an in-memory
//! [`store::FixtureStore`]; one server instance simulates one browser
//! context, and tests construct their own instance for isolation.
//!
//! # Architecture
//!
//! - Axum router dispatching on (method, path)
//! - Per-instance fixture store behind the shared [`state::AppState`]
//! - Structured `{"error": ...}` JSON for every failure path
//!
//! # Example
//!
//! ```rust,no_run
//! use pizza_stub_server::{app, state::AppState, store::FixtureStore};
//!
//! # async fn run() {
//! let state = AppState::new(FixtureStore::standard());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
//! axum::serve(listener, app(state)).await.unwrap();
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod token;

use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application: API routes plus the welcome and health
/// endpoints and request tracing.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Welcome banner, standing in for the service's landing response.
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "welcome to pizza-stub",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The stub has no dependencies to
/// probe.
async fn health() -> &'static str {
    "ok"
}
