//! End-to-end tests for Pizza Stub.
//!
//! Each test boots its own mock server on an ephemeral port - one server
//! instance per simulated browser context, so concurrent tests never share
//! fixture state - and drives the mocked REST surface over real HTTP.
//!
//! # Test Categories
//!
//! - `auth` - Login, registration, logout, session probe
//! - `users` - Directory listing, filtering, pagination, update, delete
//! - `franchises` - Franchise/store fixtures and their mutations
//! - `orders` - Menu, order placement, history, token verification

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, Response};
use serde_json::json;

use pizza_stub_server::state::AppState;
use pizza_stub_server::store::FixtureStore;

/// A running mock server plus an HTTP client pointed at it.
pub struct TestContext {
    /// Client for driving the mocked surface.
    pub client: Client,
    /// Base URL of this context's server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
}

impl TestContext {
    /// Boot a server over the standard fixtures.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind an ephemeral port.
    pub async fn new() -> Self {
        Self::with_store(FixtureStore::standard()).await
    }

    /// Boot a server over a caller-assembled fixture store.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind an ephemeral port.
    pub async fn with_store(store: FixtureStore) -> Self {
        let app = pizza_stub_server::app(AppState::new(store));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Listener has no local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on this context's server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// PUT /api/auth - log in.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.client
            .put(self.url("/api/auth"))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("login request failed")
    }

    /// POST /api/auth - register.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Response {
        self.client
            .post(self.url("/api/auth"))
            .json(&json!({"name": name, "email": email, "password": password}))
            .send()
            .await
            .expect("register request failed")
    }

    /// DELETE /api/auth - log out.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn logout(&self) -> Response {
        self.client
            .delete(self.url("/api/auth"))
            .send()
            .await
            .expect("logout request failed")
    }

    /// GET /api/user/me - the session user as raw JSON.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent or the body is not JSON.
    pub async fn me(&self) -> serde_json::Value {
        self.client
            .get(self.url("/api/user/me"))
            .send()
            .await
            .expect("me request failed")
            .json()
            .await
            .expect("me response was not JSON")
    }
}
