use chrono::{TimeZone, Utc};
use entity::user::UserRole;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{query::ListOptions, user::UserRepository},
    model::user::{CreateUserParams, UpdateUserParams, UserListQuery},
};

mod create;
mod delete;
mod find;
mod get_all;
mod update;
