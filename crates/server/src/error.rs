//! Unified error handling for the mock API.
//!
//! Every failure path responds with a structured `{"error": ...}` JSON body
//! and one of the statuses the mocked surface uses (400/401/403/404/409/418).
//! All route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the mock API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A fixture-store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Bad request from the client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// The `{"error": ...}` wire shape.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(err) => match err {
                StoreError::BadCredentials | StoreError::NotLoggedIn => {
                    StatusCode::UNAUTHORIZED
                }
                StoreError::EmailTaken => StatusCode::CONFLICT,
                StoreError::UserNotFound(_)
                | StoreError::UserEmailNotFound(_)
                | StoreError::FranchiseNotFound(_)
                | StoreError::StoreNotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::PatchDroppedEmail => StatusCode::IM_A_TEAPOT,
                StoreError::InvalidOrderToken => StatusCode::FORBIDDEN,
                StoreError::InvalidPatch(_) | StoreError::InvalidField(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(status = %status, error = %self, "request rejected");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pizza_stub_core::{FranchiseId, UserId};

    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(StoreError::BadCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(StoreError::NotLoggedIn.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(StoreError::EmailTaken.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(StoreError::UserNotFound(UserId::from("9")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::FranchiseNotFound(FranchiseId::new(9)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::PatchDroppedEmail.into()),
            StatusCode::IM_A_TEAPOT
        );
        assert_eq!(
            status_of(StoreError::InvalidOrderToken.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::BadRequest("nope".to_owned())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_display() {
        let err: AppError = StoreError::UserNotFound(UserId::from("42")).into();
        assert_eq!(err.to_string(), "user with id 42 not found");
    }
}
