use std::time::Duration;

use entity::user::UserRole;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::UserInput,
    service::auth::{token::TokenService, AuthService},
};

mod login;
mod signup;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::from_secs(3600))
}

fn input(email: &str) -> UserInput {
    UserInput {
        username: "link".to_string(),
        email: email.to_string(),
        password: "Password123!".to_string(),
        role: None,
    }
}
