//! Type-safe session management wrapper.
//!
//! The session stores nothing but the signed token issued at sign-up or login, so a
//! browser client can authenticate with its cookie instead of an `Authorization` header.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_TOKEN: &str = "auth:token";

/// Authentication session management.
///
/// Handles storing and retrieving the caller's token and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed token in the session.
    ///
    /// Called after successful sign-up or login.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_TOKEN, token.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - A token was stored
    /// - `Ok(None)` - No token in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_TOKEN).await?)
    }

    /// Removes the session and its cookie.
    ///
    /// # Returns
    /// - `Ok(())` - Session deleted
    /// - `Err(AppError::SessionErr(_))` - Store failed to delete the record
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
