use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        auth::{resolve_requested_role, Identity},
        user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User, UserInput, UserListQuery},
    },
    service::auth::EMAIL_TAKEN,
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashing the password and resolving the role against `actor`.
    ///
    /// # Arguments
    /// - `input` - Validated user fields
    /// - `actor` - Caller, if authenticated; only an admin caller may grant `admin`
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        input: UserInput,
        actor: Option<&Identity>,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&input.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                username: input.username,
                email: input.email,
                password_hash: hash_password(&input.password)?,
                role: resolve_requested_role(input.role, actor),
            })
            .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets a filtered page of users with the filters echoed back.
    pub async fn get_all(&self, query: UserListQuery) -> Result<PaginatedUsers, AppError> {
        let page = UserRepository::new(self.db).get_all(&query).await?;

        Ok(PaginatedUsers {
            page,
            filters: query.filters_dto(),
        })
    }

    /// Replaces a user's fields.
    ///
    /// Omitting `role` keeps the stored role; a requested role is honoured only for an
    /// admin `actor`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Hashing or database error
    pub async fn update(
        &self,
        id: i32,
        input: UserInput,
        actor: &Identity,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let role = match input.role {
            Some(role) => resolve_requested_role(Some(role), Some(actor)),
            None => existing.role,
        };

        let user = repo
            .update(UpdateUserParams {
                id,
                username: input.username,
                email: input.email,
                password_hash: hash_password(&input.password)?,
                role,
            })
            .await?;

        Ok(user)
    }

    /// Deletes a user and, by cascade, their reviews.
    pub async fn delete(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).delete(id).await?)
    }
}
