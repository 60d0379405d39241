use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{
            AverageRatingDto, CreateReviewDto, PaginatedReviewsDto, ReviewDto, UpdateReviewDto,
        },
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::{
            auth::{authorize, AuthGuard, Credentials, Permission},
            validation::ValidatedJson,
        },
        model::{
            list::ListParams,
            review::{CreateReviewParams, ReviewListParams, ReviewListQuery, UpdateReviewParams},
        },
        service::review::ReviewService,
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

static REVIEW_NOT_FOUND: &str = "Review not found";

/// List reviews.
///
/// Each review carries its author's username and the game's title. Filters cover
/// free-text search over title and content, an exact rating or `min-max` range, the
/// game, the author and an inclusive `created_at` date range.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, sorting, search and filter parameters
///
/// # Returns
/// - `200 OK` - Page of reviews with pagination metadata
/// - `400 Bad Request` - Malformed page, limit, rating, id or date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "id, title, rating, created_at or updated_at"),
        ("order" = Option<String>, Query, description = "asc or desc (default: desc)"),
        ("search" = Option<String>, Query, description = "Substring of title or content"),
        ("rating" = Option<String>, Query, description = "Exact rating, e.g. 4, or range, e.g. 2-4"),
        ("gameId" = Option<i32>, Query, description = "Only reviews of this game"),
        ("userId" = Option<i32>, Query, description = "Only reviews by this user"),
        ("startDate" = Option<String>, Query, description = "Created on or after, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Created on or before, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Reviews fetched successfully", body = PaginatedReviewsDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ReviewListQuery::try_from(params)?;
    let reviews = ReviewService::new(&state.db).get_all(query).await?;

    Ok(respond(
        StatusCode::OK,
        "Reviews fetched successfully",
        reviews.into_dto(),
    ))
}

/// Review a game as the authenticated user.
///
/// The author is always the caller; a user may review each game once.
///
/// # Access Control
/// - Authenticated
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller's token
/// - `payload` - Title, optional content, rating and game ID
///
/// # Returns
/// - `201 Created` - The review with author and game names
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Game does not exist
/// - `409 Conflict` - Caller already reviewed this game
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created successfully", body = ReviewDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Game already reviewed", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(payload): ValidatedJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams {
            user_id: identity.user_id,
            game_id: payload.game_id,
            title: payload.title.trim().to_string(),
            content: payload.content.unwrap_or_default(),
            rating: payload.rating,
        })
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        "Review created successfully",
        review.into_dto(),
    ))
}

/// List reviews of one game.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of the game's reviews
/// - `400 Bad Request` - Invalid ID or paging
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    get,
    path = "/api/reviews/game/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort column"),
        ("order" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Reviews fetched successfully", body = PaginatedReviewsDto),
        (status = 400, description = "Invalid ID or query parameter", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_reviews_by_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let game_id = parse_path_id("id", &id)?;
    let options = params.into_options()?;

    let reviews = ReviewService::new(&state.db)
        .get_by_game(game_id, options)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Reviews fetched successfully",
        reviews.into_dto(),
    ))
}

/// Average rating of a game, rounded to two decimals.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Average and review count; the average is null without reviews
/// - `400 Bad Request` - Invalid ID
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    get,
    path = "/api/reviews/game/{id}/average_rating",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Average rating fetched successfully", body = AverageRatingDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_average_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let game_id = parse_path_id("id", &id)?;

    let average = ReviewService::new(&state.db)
        .average_rating(game_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Average rating fetched successfully",
        average.into_dto(),
    ))
}

/// List reviews written by one user.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of the user's reviews
/// - `400 Bad Request` - Invalid ID or paging
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    get,
    path = "/api/reviews/user/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort column"),
        ("order" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Reviews fetched successfully", body = PaginatedReviewsDto),
        (status = 400, description = "Invalid ID or query parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_reviews_by_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_path_id("id", &id)?;
    let options = params.into_options()?;

    let reviews = ReviewService::new(&state.db)
        .get_by_user(user_id, options)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Reviews fetched successfully",
        reviews.into_dto(),
    ))
}

/// Get a review by ID.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The review
/// - `400 Bad Request` - Invalid ID
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review fetched successfully", body = ReviewDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let Some(review) = ReviewService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Review fetched successfully",
        review.into_dto(),
    ))
}

/// Edit one of the caller's reviews.
///
/// # Access Control
/// - `Owner` - Only the review's author
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - Invalid ID or payload
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated successfully", body = ReviewDto),
        (status = 400, description = "Invalid ID or payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let identity = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[])
        .await?;

    let service = ReviewService::new(&state.db);

    let Some(existing) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };
    authorize(&identity, &[Permission::Owner(existing.user_id)])?;

    let Some(review) = service
        .update(UpdateReviewParams {
            id,
            title: payload.title.trim().to_string(),
            content: payload.content.unwrap_or_default(),
            rating: payload.rating,
        })
        .await?
    else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Review updated successfully",
        review.into_dto(),
    ))
}

/// Delete one of the caller's reviews.
///
/// # Access Control
/// - `Owner` - Only the review's author
///
/// # Returns
/// - `200 OK` - The deleted review
/// - `400 Bad Request` - Invalid ID
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted successfully", body = ReviewDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let identity = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[])
        .await?;

    let service = ReviewService::new(&state.db);

    let Some(existing) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };
    authorize(&identity, &[Permission::Owner(existing.user_id)])?;

    let Some(review) = service.delete(id).await? else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };

    Ok(respond(
        StatusCode::OK,
        "Review deleted successfully",
        review.into_dto(),
    ))
}

/// Delete any review.
///
/// # Access Control
/// - `Admin` - Moderation route, ignores ownership
///
/// # Returns
/// - `200 OK` - The deleted review
/// - `400 Bad Request` - Invalid ID
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    delete,
    path = "/api/reviews/admin/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted successfully", body = ReviewDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review_admin(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id("id", &id)?;

    let admin = AuthGuard::new(&state.db, &state.tokens, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let Some(review) = ReviewService::new(&state.db).delete(id).await? else {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    };

    tracing::info!("Review {} removed by admin {}", review.id, admin.user_id);

    Ok(respond(
        StatusCode::OK,
        "Review deleted successfully",
        review.into_dto(),
    ))
}
