use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, UserDto, UserPayloadDto},
    },
    server::{
        controller::respond,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Credentials, Permission},
            validation::ValidatedJson,
        },
        model::user::{UserInput, UserListParams, UserListQuery},
        service::{review::USER_NOT_FOUND, user::UserService},
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users.
///
/// Returns a page of users filtered by free-text search over username and email,
/// role and an inclusive `created_at` date range. The applied filters are echoed back.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, sorting, search and filter parameters
///
/// # Returns
/// - `200 OK` - Page of users with pagination metadata
/// - `400 Bad Request` - Malformed page, limit, role or date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "id, username, email, role or created_at"),
        ("order" = Option<String>, Query, description = "asc or desc"),
        ("search" = Option<String>, Query, description = "Substring of username or email"),
        ("role" = Option<String>, Query, description = "user or admin"),
        ("startDate" = Option<String>, Query, description = "Created on or after, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Created on or before, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Users fetched successfully", body = PaginatedUsersDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = UserListQuery::try_from(params)?;
    let users = UserService::new(&state.db).get_all(query).await?;

    Ok(respond(
        StatusCode::OK,
        "Users fetched successfully",
        users.into_dto(),
    ))
}

/// Create a user.
///
/// Anyone may create an account here. A requested `admin` role is kept only when the
/// request carries an admin's token; otherwise the account is created as `user`.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Optional token, consulted only to decide the role
/// - `payload` - Username, email, password and optional role
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - A token was sent but is invalid
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "User created successfully", body = UserDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(payload): ValidatedJson<UserPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = match credentials.token() {
        Some(_) => Some(
            AuthGuard::new(&state.db, &state.tokens, &credentials)
                .require(&[])
                .await?,
        ),
        None => None,
    };

    let input = UserInput::from_dto(payload)?;
    let user = UserService::new(&state.db)
        .create(input, actor.as_ref())
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        "User created successfully",
        user.into_dto(),
    ))
}

/// Create a user with any role.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts with an elevated role
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users/admin",
    tag = USER_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "User created successfully", body = UserDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn create_admin_user(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(payload): ValidatedJson<UserPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let input = UserInput::from_dto(payload)?;
    let user = UserService::new(&state.db)
        .create(input, Some(&actor))
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        "User created successfully",
        user.into_dto(),
    ))
}

/// Get a user by ID.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User fetched successfully", body = UserDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let Some(user) = UserService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "User fetched successfully",
        user.into_dto(),
    ))
}

/// Replace a user's username, email and password.
///
/// Omitting `role` keeps the current role. A role change is honoured only for admins.
///
/// # Access Control
/// - `OwnerOrAdmin` - The account owner or any admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller's token
/// - `id` - ID of the user to update
/// - `payload` - Replacement fields
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid ID or payload
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Neither the owner nor an admin
/// - `404 Not Found` - No user with that ID
/// - `409 Conflict` - Email belongs to another account
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayloadDto,
    responses(
        (status = 200, description = "User updated successfully", body = UserDto),
        (status = 400, description = "Invalid ID or payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let actor = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let input = UserInput::from_dto(payload)?;
    let Some(user) = UserService::new(&state.db)
        .update(id, input, &actor)
        .await?
    else {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "User updated successfully",
        user.into_dto(),
    ))
}

/// Delete a user and all of their reviews.
///
/// # Access Control
/// - `OwnerOrAdmin` - The account owner or any admin; an admin cannot delete their
///   own account
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `400 Bad Request` - Invalid ID
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not permitted, or an admin deleting themselves
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = UserDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let actor = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    if actor.is_admin() && actor.user_id == id {
        return Err(AuthError::AccessDenied(
            actor.user_id,
            "admin attempted to delete their own account".to_string(),
        )
        .into());
    }

    let Some(user) = UserService::new(&state.db).delete(id).await? else {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    };

    tracing::info!("User {} deleted by user {}", user.id, actor.user_id);

    Ok(respond(
        StatusCode::OK,
        "User deleted successfully",
        user.into_dto(),
    ))
}
