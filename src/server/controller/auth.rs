use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthDto, LoginDto},
        user::{UserDto, UserPayloadDto},
    },
    server::{
        controller::{respond, respond_empty},
        error::AppError,
        middleware::{
            auth::{AuthGuard, Credentials},
            session::AuthSession,
            validation::ValidatedJson,
        },
        model::user::UserInput,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account, signs a token for it and stores the token in the session
/// cookie. A requested `role` is ignored; new accounts are always `user`.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token signer
/// - `session` - Session the new token is stored in
/// - `payload` - Username, email and password
///
/// # Returns
/// - `201 Created` - The new user and their token
/// - `400 Bad Request` - Invalid payload
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "User created successfully", body = AuthDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<UserPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let input = UserInput::from_dto(payload)?;
    let authenticated = AuthService::new(&state.db, &state.tokens)
        .signup(input)
        .await?;

    AuthSession::new(&session)
        .set_token(&authenticated.token)
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        "User created successfully",
        authenticated.into_dto(),
    ))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The user and a fresh token, also stored in the session cookie
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &state.tokens)
        .login(payload.email.trim(), &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_token(&authenticated.token)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Login successful",
        authenticated.into_dto(),
    ))
}

/// Log out and delete the session.
///
/// Tokens are stateless, so a bearer token stays valid until it expires.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `401 Unauthorized` - No valid token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logout successful"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[])
        .await?;

    AuthSession::new(&session).clear().await?;

    tracing::debug!("User {} logged out", identity.user_id);

    Ok(respond_empty(StatusCode::OK, "Logout successful"))
}

/// Get the authenticated user.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - No valid token, or the account no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "User fetched successfully", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[])
        .await?;

    let user = AuthService::new(&state.db, &state.tokens)
        .me(identity.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "User fetched successfully",
        user.into_dto(),
    ))
}
