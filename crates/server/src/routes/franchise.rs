//! Franchise route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use pizza_stub_core::{Email, Franchise, FranchiseId, ListQuery, Page, Store, StoreId, UserId};

use crate::error::{AppError, Result};
use crate::state::AppState;

use super::auth::MessageResponse;

/// One page of the franchise list.
#[derive(Debug, Serialize)]
pub struct FranchiseListResponse {
    pub franchises: Vec<Franchise>,
    pub more: bool,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl From<Page<Franchise>> for FranchiseListResponse {
    fn from(page: Page<Franchise>) -> Self {
        Self {
            franchises: page.items,
            more: page.more,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

/// Franchise creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateFranchiseRequest {
    pub name: String,
    /// Admins referenced by email, resolved against the user directory.
    #[serde(default)]
    pub admins: Vec<AdminRef>,
}

/// An admin reference in a creation request.
#[derive(Debug, Deserialize)]
pub struct AdminRef {
    pub email: String,
}

/// Store creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateStoreRequest {
    pub name: String,
}

/// List the franchise fixtures.
///
/// GET /api/franchise?page=0&limit=10&name=*
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<FranchiseListResponse> {
    let page = state.store().list_franchises(&query);
    Json(page.into())
}

/// Create a franchise.
///
/// POST /api/franchise
///
/// # Errors
///
/// Responds 400 on an unparseable admin email, 404 on an admin email not in
/// the directory.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateFranchiseRequest>,
) -> Result<Json<Franchise>> {
    let mut admin_emails = Vec::with_capacity(req.admins.len());
    for admin in &req.admins {
        let email = Email::parse(&admin.email)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        admin_emails.push(email);
    }

    let franchise = state.store().create_franchise(&req.name, &admin_emails)?;
    tracing::info!(name = %franchise.name, id = %franchise.id, "franchise created");
    Ok(Json(franchise))
}

/// Franchises administered by a user.
///
/// GET /api/franchise/:userId
///
/// Unknown users get an empty list, not an error.
pub async fn for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Franchise>> {
    let franchises = state.store().franchises_for_user(&UserId::from(user_id));
    Json(franchises)
}

/// Delete a franchise.
///
/// DELETE /api/franchise/:id
///
/// # Errors
///
/// Responds 404 `{error}` on an unknown id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.store().delete_franchise(FranchiseId::new(id))?;
    tracing::info!(id, "franchise deleted");

    Ok(Json(MessageResponse {
        message: "franchise deleted".to_owned(),
    }))
}

/// Create a store under a franchise.
///
/// POST /api/franchise/:id/store
///
/// # Errors
///
/// Responds 404 `{error}` on an unknown franchise.
pub async fn create_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CreateStoreRequest>,
) -> Result<Json<Store>> {
    let store = state
        .store()
        .create_store(FranchiseId::new(id), &req.name)?;
    tracing::info!(franchise = id, store = %store.id, "store created");
    Ok(Json(store))
}

/// Delete a store from a franchise.
///
/// DELETE /api/franchise/:id/store/:storeId
///
/// # Errors
///
/// Responds 404 `{error}` when either id is unknown.
pub async fn remove_store(
    State(state): State<AppState>,
    Path((id, store_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>> {
    state
        .store()
        .delete_store(FranchiseId::new(id), StoreId::new(store_id))?;
    tracing::info!(franchise = id, store = store_id, "store deleted");

    Ok(Json(MessageResponse {
        message: "store deleted".to_owned(),
    }))
}
