//! HTTP route handlers for the mocked pizza-service surface.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Auth
//! PUT    /api/auth                    - Login
//! POST   /api/auth                    - Register
//! DELETE /api/auth                    - Logout
//!
//! # Users
//! GET    /api/user/me                 - Current session user
//! GET    /api/user                    - Paginated/filterable directory
//! PUT    /api/user/:id                - Update the logged-in user
//! DELETE /api/user/:id                - Remove a user
//!
//! # Franchises
//! GET    /api/franchise               - List (paginated/filterable)
//! POST   /api/franchise               - Create
//! GET    /api/franchise/:userId       - Franchises administered by a user
//! DELETE /api/franchise/:id           - Delete
//! POST   /api/franchise/:id/store     - Create store
//! DELETE /api/franchise/:id/store/:storeId - Delete store
//!
//! # Orders
//! GET  /api/order/menu                - Static menu
//! GET  /api/order                     - Order history (session-gated)
//! POST /api/order                     - Place order
//! POST /api/order/verify              - Verify a proof-of-purchase token
//! ```

pub mod auth;
pub mod franchise;
pub mod order;
pub mod user;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/me", get(auth::me))
        .route("/{id}", put(user::update).delete(user::remove))
}

/// Create the franchise routes router.
pub fn franchise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(franchise::list).post(franchise::create))
        .route(
            "/{id}",
            get(franchise::for_user).delete(franchise::remove),
        )
        .route("/{id}/store", post(franchise::create_store))
        .route("/{id}/store/{store_id}", delete(franchise::remove_store))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::history).post(order::place))
        .route("/menu", get(order::menu))
        .route("/verify", post(order::verify))
}

/// Create all routes for the mocked surface.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth (login/register/logout share one path, split by method)
        .route(
            "/api/auth",
            put(auth::login).post(auth::register).delete(auth::logout),
        )
        // User directory
        .nest("/api/user", user_routes())
        // Franchise fixtures
        .nest("/api/franchise", franchise_routes())
        // Orders
        .nest("/api/order", order_routes())
}
