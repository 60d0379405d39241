use std::time::Duration;

use axum::{extract::FromRequestParts, http::Request};
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Credentials, Permission},
        session::AuthSession,
    },
    model::user::User,
    service::auth::token::TokenService,
};

mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::from_secs(3600))
}

fn token_for(tokens: &TokenService, user: entity::user::Model) -> String {
    tokens.issue(&User::from_entity(user)).unwrap()
}
