//! User domain models and parameters.
//!
//! `User` is the only shape a user leaves the data layer in; it has no password field, so
//! list and detail projections cannot leak the hash. `UserCredentials` carries the hash and
//! is produced solely by the login lookup.

use chrono::{DateTime, NaiveDate, Utc};
use entity::user::UserRole;
use sea_orm::{ColumnTrait, FromQueryResult};
use serde::Deserialize;

use crate::{
    model::user::{PaginatedUsersDto, UserDto, UserFiltersDto, UserPayloadDto},
    server::{
        data::query::{Filter, ListOptions, Page, SortField, SortOrder},
        error::AppError,
        model::list::ListParams,
        util::parse::parse_date_range,
    },
};

/// Public projection of a user row.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: role_name(self.role).to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// A user together with their stored password hash, for credential checks only.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

pub fn role_name(role: UserRole) -> &'static str {
    match role {
        UserRole::User => "user",
        UserRole::Admin => "admin",
    }
}

pub fn parse_role(value: &str) -> Option<UserRole> {
    match value.trim().to_ascii_lowercase().as_str() {
        "user" => Some(UserRole::User),
        "admin" => Some(UserRole::Admin),
        _ => None,
    }
}

/// User fields as submitted, before hashing and role resolution.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
}

impl UserInput {
    /// Trims username and email; an unknown role is rejected.
    pub fn from_dto(dto: UserPayloadDto) -> Result<Self, AppError> {
        let role = match dto.role.as_deref() {
            None => None,
            Some(role) => Some(parse_role(role).ok_or_else(|| {
                AppError::BadRequest("role must be one of: user, admin".to_string())
            })?),
        };

        Ok(Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            role,
        })
    }
}

/// Fields written on user creation. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Full replacement of a user's fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Id,
    Username,
    Email,
    Role,
    CreatedAt,
}

impl SortField for UserSortField {
    type Column = entity::user::Column;

    const DEFAULT: Self = Self::Id;
    const DEFAULT_ORDER: SortOrder = SortOrder::Asc;
    const ALLOWED: &'static [Self] = &[
        Self::Id,
        Self::Username,
        Self::Email,
        Self::Role,
        Self::CreatedAt,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::Email => "email",
            Self::Role => "role",
            Self::CreatedAt => "created_at",
        }
    }

    fn column(&self) -> Self::Column {
        match self {
            Self::Id => entity::user::Column::Id,
            Self::Username => entity::user::Column::Username,
            Self::Email => entity::user::Column::Email,
            Self::Role => entity::user::Column::Role,
            Self::CreatedAt => entity::user::Column::CreatedAt,
        }
    }
}

/// `GET /api/users` query string as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    #[serde(flatten)]
    pub list: ListParams,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated user list query.
#[derive(Debug, Clone, PartialEq)]
pub struct UserListQuery {
    pub options: ListOptions<UserSortField>,
    pub role: Option<UserRole>,
    /// Inclusive lower bound on `created_at`, by UTC day.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `created_at`, by UTC day.
    pub end_date: Option<NaiveDate>,
}

impl UserListQuery {
    pub fn filter(&self) -> Filter {
        use entity::user::Column;

        Filter::new()
            .search(
                &[Column::Username, Column::Email],
                self.options.search.as_deref(),
            )
            .add_option(self.role, |role| Column::Role.eq(role))
            .timestamp_range(Column::CreatedAt, self.start_date, self.end_date)
    }

    pub fn filters_dto(&self) -> UserFiltersDto {
        UserFiltersDto {
            sort_by: self.options.sort_by.name().to_string(),
            order: self.options.order.as_str().to_string(),
            search: self.options.search.clone(),
            role: self.role.map(|r| role_name(r).to_string()),
            start_date: self.start_date.map(|d| d.to_string()),
            end_date: self.end_date.map(|d| d.to_string()),
        }
    }
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            options: ListOptions::default(),
            role: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl TryFrom<UserListParams> for UserListQuery {
    type Error = AppError;

    fn try_from(params: UserListParams) -> Result<Self, Self::Error> {
        let role = match params.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => None,
            Some(role) => Some(parse_role(role).ok_or_else(|| {
                AppError::BadRequest("role must be one of: user, admin".to_string())
            })?),
        };
        let (start_date, end_date) =
            parse_date_range(params.start_date.as_deref(), params.end_date.as_deref())?;

        Ok(Self {
            options: params.list.into_options()?,
            role,
            start_date,
            end_date,
        })
    }
}

/// Page of users plus the normalized filters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub page: Page<User>,
    pub filters: UserFiltersDto,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            records: self.page.records.into_iter().map(User::into_dto).collect(),
            pagination: self.page.pagination.into_dto(),
            filters: self.filters,
        }
    }
}
