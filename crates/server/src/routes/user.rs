//! User directory route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use serde_json::{Map, Value};

use pizza_stub_core::{ListQuery, Page, User, UserId};

use crate::error::Result;
use crate::state::AppState;
use crate::token;

use super::auth::AuthResponse;

/// One page of the user directory.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub more: bool,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        Self {
            users: page.items,
            more: page.more,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

/// Deletion confirmation, echoing the removed id.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub id: UserId,
}

/// List the user directory.
///
/// GET /api/user?page=0&limit=10&name=*
///
/// `name` is a case-insensitive substring filter; `*` matches everything.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<UserListResponse> {
    let page = state.store().list_users(&query);
    Json(page.into())
}

/// Update the logged-in user.
///
/// PUT /api/user/:id
///
/// The patch is merged over the logged-in user's record regardless of the
/// path id - the mocked surface has exactly one session to edit.
///
/// # Errors
///
/// Responds 401 without a session, 418 if the merge drops the email, 409 if
/// the new email collides, 400 if the merged record is invalid.
pub async fn update(
    State(state): State<AppState>,
    Path(_id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<AuthResponse>> {
    let user = state.store().update_user(&patch)?;
    tracing::info!(email = %user.email, "profile updated");

    Ok(Json(AuthResponse {
        user,
        token: token::mint(),
    }))
}

/// Remove a user from the directory.
///
/// DELETE /api/user/:id
///
/// # Errors
///
/// Responds 404 `{error}` if no user has the given id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>> {
    let id = UserId::from(id);
    state.store().delete_user(&id)?;
    tracing::info!(%id, "user deleted");

    Ok(Json(DeleteUserResponse {
        message: "user deleted".to_owned(),
        id,
    }))
}
