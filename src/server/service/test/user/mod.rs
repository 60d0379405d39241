use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{auth::Identity, user::UserInput},
    service::user::UserService,
    util::password::verify_password,
};

mod create;
mod update;

fn input(email: &str, role: Option<UserRole>) -> UserInput {
    UserInput {
        username: "zelda".to_string(),
        email: email.to_string(),
        password: "Password123!".to_string(),
        role,
    }
}
