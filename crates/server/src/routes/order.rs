//! Order route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use pizza_stub_core::{MenuItem, OrderHistory, OrderReceipt, OrderRequest};

use crate::error::Result;
use crate::state::AppState;

use super::auth::MessageResponse;

/// Token verification request body.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub jwt: String,
}

/// The static menu.
///
/// GET /api/order/menu
pub async fn menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.store().menu())
}

/// Order history for the logged-in diner.
///
/// GET /api/order
///
/// # Errors
///
/// Responds 401 `{error}` when no session is active.
pub async fn history(State(state): State<AppState>) -> Result<Json<OrderHistory>> {
    let history = state.store().order_history()?;
    Ok(Json(history))
}

/// Place an order.
///
/// POST /api/order
///
/// Echoes the order with a server-assigned id plus the proof-of-purchase
/// token.
pub async fn place(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Json<OrderReceipt> {
    let receipt = state.store().place_order(req);
    tracing::info!(order = %receipt.order.id, items = receipt.order.items.len(), "order placed");
    Json(receipt)
}

/// Verify a proof-of-purchase token.
///
/// POST /api/order/verify
///
/// # Errors
///
/// Responds 403 `{error}` for tokens this instance never issued.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<MessageResponse>> {
    state.store().verify_order(&req.jwt)?;

    Ok(Json(MessageResponse {
        message: "valid".to_owned(),
    }))
}
