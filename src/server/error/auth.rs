use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no actor header.
    ///
    /// The upstream gateway forwards the authenticated user's id; its absence means
    /// the request was not authenticated. Results in 401 Unauthorized.
    #[error("Request has no authenticated user")]
    MissingActor,

    /// The actor header is present but is not a user id.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid authenticated user id '{0}'")]
    InvalidActor(String),

    /// The forwarded user id does not exist in the user table.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// User is authenticated but lacks a required permission.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing, malformed, or unknown actors
/// - 403 Forbidden - For users lacking a required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingActor | Self::InvalidActor(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Admin access required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
