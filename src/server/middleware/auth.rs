//! Authentication extractor and permission guard.
//!
//! Handlers extract `Credentials`, then build an `AuthGuard` and call `require` with the
//! route's permission list. The guard verifies the token, confirms the account still
//! exists and checks every permission before the handler does any work.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::auth::Identity,
    service::auth::token::TokenService,
};

/// Token presented with a request.
///
/// A bearer header wins over the session cookie.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        if let Some(token) = bearer {
            return Ok(Self::bearer(token));
        }

        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self::default());
        };

        Ok(Self {
            token: AuthSession::new(session).get_token().await?,
        })
    }
}

pub enum Permission {
    /// Caller has the admin role.
    Admin,
    /// Caller is the user with this ID.
    Owner(i32),
    /// Caller is the user with this ID or an admin.
    OwnerOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    credentials: &'a Credentials,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        credentials: &'a Credentials,
    ) -> Self {
        Self {
            db,
            tokens,
            credentials,
        }
    }

    /// Authenticates the caller and checks every permission in order.
    ///
    /// # Arguments
    /// - `permissions` - All must hold; an empty list only requires authentication
    ///
    /// # Returns
    /// - `Ok(Identity)` - Caller is authenticated and permitted
    /// - `Err(AuthError::MissingToken)` - No token presented
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted account
    /// - `Err(AuthError::AccessDenied)` - First permission that failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let Some(token) = self.credentials.token() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.id).into());
        };

        // Stored role wins over the claim so a demotion applies immediately.
        let identity = Identity::from_user(&user);

        authorize(&identity, permissions)?;

        Ok(identity)
    }
}

/// Checks permissions for an already authenticated caller.
///
/// Used directly when the owner is only known after loading the resource.
///
/// # Returns
/// - `Ok(())` - Every permission holds
/// - `Err(AuthError::AccessDenied)` - First permission that failed
pub fn authorize(identity: &Identity, permissions: &[Permission]) -> Result<(), AppError> {
    for permission in permissions {
        match permission {
            Permission::Admin => {
                if !identity.is_admin() {
                    return Err(AuthError::AccessDenied(
                        identity.user_id,
                        "admin role required".to_string(),
                    )
                    .into());
                }
            }
            Permission::Owner(owner_id) => {
                if identity.user_id != *owner_id {
                    return Err(AuthError::AccessDenied(
                        identity.user_id,
                        format!("resource belongs to user {}", owner_id),
                    )
                    .into());
                }
            }
            Permission::OwnerOrAdmin(owner_id) => {
                if identity.user_id != *owner_id && !identity.is_admin() {
                    return Err(AuthError::AccessDenied(
                        identity.user_id,
                        format!("resource belongs to user {} and caller is not admin", owner_id),
                    )
                    .into());
                }
            }
        }
    }

    Ok(())
}
