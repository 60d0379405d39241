use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDto, GamePayloadDto, PaginatedGamesDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Credentials, Permission},
            validation::ValidatedJson,
        },
        model::{
            game::{GameListParams, GameListQuery, GameParams},
            list::ListParams,
        },
        service::{game::GameService, review::GAME_NOT_FOUND},
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List games.
///
/// Returns a page of games filtered by free-text search over title, description, genre
/// and developer, by genre and platform substrings and by an inclusive release date
/// range.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, sorting, search and filter parameters
///
/// # Returns
/// - `200 OK` - Page of games with pagination metadata
/// - `400 Bad Request` - Malformed page, limit or date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort column, e.g. title, release_date or created_at"),
        ("order" = Option<String>, Query, description = "asc or desc"),
        ("search" = Option<String>, Query, description = "Substring of title, description, genre or developer"),
        ("genre" = Option<String>, Query, description = "Substring of genre"),
        ("platform" = Option<String>, Query, description = "Substring of platform"),
        ("startDate" = Option<String>, Query, description = "Released on or after, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Released on or before, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Games fetched successfully", body = PaginatedGamesDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    Query(params): Query<GameListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = GameListQuery::try_from(params)?;
    let games = GameService::new(&state.db).get_all(query).await?;

    Ok(respond(
        StatusCode::OK,
        "Games fetched successfully",
        games.into_dto(),
    ))
}

/// Create a game.
///
/// # Access Control
/// - `Admin` - Only admins can add games
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller's token
/// - `payload` - Game fields; only `title` is required
///
/// # Returns
/// - `201 Created` - The created game
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = GamePayloadDto,
    responses(
        (status = 201, description = "Game created successfully", body = GameDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(payload): ValidatedJson<GamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = GameParams::from_dto(payload)?;
    let game = GameService::new(&state.db).create(params).await?;

    Ok(respond(
        StatusCode::CREATED,
        "Game created successfully",
        game.into_dto(),
    ))
}

/// List games whose genre contains the path segment, case-insensitively.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of matching games
/// - `400 Bad Request` - Blank genre or malformed paging
#[utoipa::path(
    get,
    path = "/api/games/genre/{genre}",
    tag = GAME_TAG,
    params(
        ("genre" = String, Path, description = "Genre substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort column"),
        ("order" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Games fetched successfully", body = PaginatedGamesDto),
        (status = 400, description = "Invalid genre or query parameter", body = ErrorDto)
    ),
)]
pub async fn get_games_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let options = params.into_options()?;
    let games = GameService::new(&state.db)
        .get_by_genre(&genre, options)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Games fetched successfully",
        games.into_dto(),
    ))
}

/// Search games by a term in the path.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of matching games
/// - `400 Bad Request` - Blank term or malformed paging
#[utoipa::path(
    get,
    path = "/api/games/search/{term}",
    tag = GAME_TAG,
    params(
        ("term" = String, Path, description = "Search term"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort column"),
        ("order" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Games fetched successfully", body = PaginatedGamesDto),
        (status = 400, description = "Invalid term or query parameter", body = ErrorDto)
    ),
)]
pub async fn search_games(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let options = params.into_options()?;
    let games = GameService::new(&state.db).search(&term, options).await?;

    Ok(respond(
        StatusCode::OK,
        "Games fetched successfully",
        games.into_dto(),
    ))
}

/// Get a game by ID.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The game
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No game with that ID
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game fetched successfully", body = GameDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let Some(game) = GameService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Game fetched successfully",
        game.into_dto(),
    ))
}

/// Replace a game's fields.
///
/// # Access Control
/// - `Admin` - Only admins can edit games
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Invalid ID or payload
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No game with that ID
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = GamePayloadDto,
    responses(
        (status = 200, description = "Game updated successfully", body = GameDto),
        (status = 400, description = "Invalid ID or payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<GamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let _ = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = GameParams::from_dto(payload)?;
    let Some(game) = GameService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Game updated successfully",
        game.into_dto(),
    ))
}

/// Delete a game and all of its reviews.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
///
/// # Returns
/// - `200 OK` - The deleted game
/// - `400 Bad Request` - Invalid ID
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No game with that ID
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game deleted successfully", body = GameDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let _ = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let Some(game) = GameService::new(&state.db).delete(id).await? else {
        return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Game deleted successfully",
        game.into_dto(),
    ))
}
