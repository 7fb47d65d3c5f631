//! Authentication route handlers.
//!
//! Login, registration, logout, and the current-session probe. Login and
//! registration hand back `{user, token}`; the token is opaque and never
//! checked by the other mocked endpoints - the session lives in the fixture
//! store, matching how the intercepted UI flows behave.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use pizza_stub_core::User;

use crate::error::Result;
use crate::state::AppState;
use crate::token;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/registration/update response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Plain confirmation response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Handle login.
///
/// PUT /api/auth
///
/// Succeeds iff the email is in the directory and the password matches
/// exactly; the session is set only on success.
///
/// # Errors
///
/// Responds 401 `{error}` on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state.store().login(&req.email, &req.password)?;
    tracing::info!(email = %req.email, "login");

    Ok(Json(AuthResponse {
        user,
        token: token::mint(),
    }))
}

/// Handle registration.
///
/// POST /api/auth
///
/// Creates a diner and makes it the active session.
///
/// # Errors
///
/// Responds 409 `{error}` if the email is already registered, leaving the
/// existing record untouched.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .store()
        .register(&req.name, &req.email, &req.password)?;
    tracing::info!(email = %req.email, "registered");

    Ok(Json(AuthResponse {
        user,
        token: token::mint(),
    }))
}

/// Handle logout.
///
/// DELETE /api/auth
///
/// Clears the session unconditionally - logging out while logged out is not
/// an error.
pub async fn logout(State(state): State<AppState>) -> Json<MessageResponse> {
    state.store().logout();

    Json(MessageResponse {
        message: "logged out".to_owned(),
    })
}

/// Return the currently logged-in user.
///
/// GET /api/user/me
///
/// Responds with JSON `null` when no session is active; the UI probes this
/// endpoint to decide logged-in state, so it is not an error.
pub async fn me(State(state): State<AppState>) -> Json<Option<User>> {
    Json(state.store().current_user())
}
