use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer header and no token in the session.
    #[error("No authentication token provided")]
    MissingToken,

    /// Token failed signature, format, or expiry validation.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Login email unknown or password mismatch. Both cases share one message.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token is valid but the account it names has been deleted.
    #[error("User {0} from token no longer exists")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permission the route requires.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Server-side description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or verification failed for a reason other than mismatch.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    TokenSigning(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::InvalidCredentials
            | Self::UserNotInDatabase(_) => StatusCode::UNAUTHORIZED,
            Self::AccessDenied(_, _) => StatusCode::FORBIDDEN,
            Self::PasswordHash(_) | Self::TokenSigning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; clients get a fixed message per status so that
/// token internals and account existence are not revealed.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or expired token, bad credentials, deleted user
/// - 403 Forbidden - Authenticated but not permitted
/// - 500 Internal Server Error - Hashing or signing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Self::MissingToken => "Authentication required",
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => "Invalid or expired token",
            Self::InvalidCredentials => "Invalid credentials",
            Self::AccessDenied(_, _) => "You do not have permission to perform this action",
            Self::PasswordHash(_) | Self::TokenSigning(_) => {
                tracing::error!("{}", self);
                return error_response(status, "Internal server error");
            }
        };

        tracing::debug!("{}", self);

        error_response(status, message)
    }
}
