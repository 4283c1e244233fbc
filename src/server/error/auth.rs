use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no session cookie.
    #[error("No session cookie present")]
    Unauthenticated,

    /// Session cookie was malformed or its signature did not verify.
    #[error("Session cookie failed verification")]
    InvalidSession,

    /// Session cookie verified but the user no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotFound(Uuid),

    /// OAuth state cookie missing or not matching the callback `state` parameter.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code with the identity provider failed.
    ///
    /// Results in 500 Internal Server Error; the provider's message is only logged.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// User is authenticated but lacks the permission required for the action.
    ///
    /// The message is logged for auditing; the client gets a generic 403.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` / `InvalidSession` / `UserNotFound` → 401 Unauthorized
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden
/// - `TokenExchange` → 500 Internal Server Error
///
/// Details stay server-side; client-facing messages are generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthenticated | Self::InvalidSession | Self::UserNotFound(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::CsrfValidationFailed => {
                tracing::warn!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::AccessDenied(_, _) => {
                tracing::warn!("{}", self);
                (StatusCode::FORBIDDEN, "Forbidden")
            }
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
