//! Account sign-up, login and current-user lookup.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{resolve_requested_role, AuthenticatedUser},
        user::{CreateUserParams, User, UserInput},
    },
    util::password::{hash_password, verify_password},
};

use self::token::TokenService;

pub const EMAIL_TAKEN: &str = "User already exists with this email";

/// Service for password authentication and token issuance.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token signer shared through application state
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// Any requested role is downgraded since the caller is anonymous.
    ///
    /// # Arguments
    /// - `input` - Validated sign-up fields
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The created user and their token
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::AuthErr)` - Hashing or signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, input: UserInput) -> Result<AuthenticatedUser, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&input.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                username: input.username,
                email: input.email,
                password_hash: hash_password(&input.password)?,
                role: resolve_requested_role(input.role, None),
            })
            .await?;

        tracing::info!("User {} signed up", user.id);

        self.authenticated(user)
    }

    /// Checks an email and password pair and signs a token.
    ///
    /// Unknown email and wrong password fail identically.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.authenticated(credentials.user)
    }

    /// Loads the account behind a verified token.
    pub async fn me(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    fn authenticated(&self, user: User) -> Result<AuthenticatedUser, AppError> {
        let token = self.tokens.issue(&user)?;

        Ok(AuthenticatedUser { user, token })
    }
}
