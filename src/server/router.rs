use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, PaginationDto},
        auth::{AuthDto, LoginDto},
        game::{GameDto, GameFiltersDto, GamePayloadDto, PaginatedGamesDto},
        review::{
            AverageRatingDto, CreateReviewDto, PaginatedReviewsDto, ReviewDto, ReviewFiltersDto,
            UpdateReviewDto,
        },
        user::{PaginatedUsersDto, UserDto, UserFiltersDto, UserPayloadDto},
    },
    server::{
        controller::{auth, game, health, review, user},
        error::error_response,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reviewboard API", description = "Users, games and reviews"),
    paths(
        health::health,
        auth::signup,
        auth::login,
        auth::logout,
        auth::me,
        user::get_users,
        user::create_user,
        user::create_admin_user,
        user::get_user,
        user::update_user,
        user::delete_user,
        game::get_games,
        game::create_game,
        game::get_games_by_genre,
        game::search_games,
        game::get_game,
        game::update_game,
        game::delete_game,
        review::get_reviews,
        review::create_review,
        review::get_reviews_by_game,
        review::get_average_rating,
        review::get_reviews_by_user,
        review::get_review,
        review::update_review,
        review::delete_review,
        review::delete_review_admin,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        PaginationDto,
        LoginDto,
        AuthDto,
        UserDto,
        UserPayloadDto,
        UserFiltersDto,
        PaginatedUsersDto,
        GameDto,
        GamePayloadDto,
        GameFiltersDto,
        PaginatedGamesDto,
        ReviewDto,
        CreateReviewDto,
        UpdateReviewDto,
        ReviewFiltersDto,
        PaginatedReviewsDto,
        AverageRatingDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Sign-up, login and session management"),
        (name = "user", description = "User accounts"),
        (name = "game", description = "Game catalogue"),
        (name = "review", description = "Game reviews and ratings")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route("/api/users/admin", post(user::create_admin_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/games", get(game::get_games).post(game::create_game))
        .route("/api/games/genre/{genre}", get(game::get_games_by_genre))
        .route("/api/games/search/{term}", get(game::search_games))
        .route(
            "/api/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::create_review),
        )
        .route("/api/reviews/game/{id}", get(review::get_reviews_by_game))
        .route(
            "/api/reviews/game/{id}/average_rating",
            get(review::get_average_rating),
        )
        .route("/api/reviews/user/{id}", get(review::get_reviews_by_user))
        .route("/api/reviews/admin/{id}", delete(review::delete_review_admin))
        .route(
            "/api/reviews/{id}",
            get(review::get_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> impl IntoResponse {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

async fn method_not_allowed() -> impl IntoResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
