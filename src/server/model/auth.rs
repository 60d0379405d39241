//! Authentication domain models.

use entity::user::UserRole;
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::AuthDto,
    server::model::user::{role_name, User},
};

/// JWT payload.
///
/// `role` is the role at issue time. Permission checks use the stored role instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub role: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// The caller behind a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: UserRole,
}

impl Identity {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// A signed-in user and the token issued to them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn into_dto(self) -> AuthDto {
        AuthDto {
            user: self.user.into_dto(),
            token: self.token,
        }
    }
}

/// Role to store for a requested role given who is asking.
///
/// Only an admin caller may assign `admin`; any other request is downgraded to the
/// default role without error.
pub fn resolve_requested_role(requested: Option<UserRole>, actor: Option<&Identity>) -> UserRole {
    match (requested, actor) {
        (Some(role), Some(actor)) if actor.is_admin() => role,
        _ => UserRole::default(),
    }
}

pub fn claims_role(role: UserRole) -> String {
    role_name(role).to_string()
}
