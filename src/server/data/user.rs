//! User data repository for database operations.
//!
//! Every read that returns a `User` selects only the public columns, so the password hash is
//! never fetched outside `find_credentials_by_email`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Select,
};

use crate::server::{
    data::query::{fetch_page, Page},
    model::user::{CreateUserParams, UpdateUserParams, User, UserCredentials, UserListQuery},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn public_columns() -> Select<entity::prelude::User> {
        use entity::user::Column;

        entity::prelude::User::find().select_only().columns([
            Column::Id,
            Column::Username,
            Column::Email,
            Column::Role,
            Column::CreatedAt,
        ])
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - User fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        Self::public_columns()
            .filter(entity::user::Column::Id.eq(id))
            .into_model::<User>()
            .one(self.db)
            .await
    }

    /// Checks whether an account already uses `email`.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a user and their password hash by email, for login only.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found, hash included
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Gets one filtered, sorted page of users.
    ///
    /// # Arguments
    /// - `query` - Validated paging, sorting and filter values
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page and pagination metadata
    /// - `Err(DbErr)` - Database error during the count or page query
    pub async fn get_all(&self, query: &UserListQuery) -> Result<Page<User>, DbErr> {
        fetch_page(self.db, Self::public_columns(), query.filter(), &query.options).await
    }

    /// Replaces a user's fields.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.username = ActiveValue::Set(params.username);
        active.email = ActiveValue::Set(params.email);
        active.password = ActiveValue::Set(params.password_hash);
        active.role = ActiveValue::Set(params.role);

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user; their reviews are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(user))
    }
}
