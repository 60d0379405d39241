use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, query::ListOptions, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::review::{
        AverageRating, CreateReviewParams, PaginatedReviews, Review, ReviewListQuery,
        ReviewSortField, UpdateReviewParams,
    },
};

pub const GAME_NOT_FOUND: &str = "Game not found";
pub const USER_NOT_FOUND: &str = "User not found";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review after checking the game exists.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review with author and game names
    /// - `Err(AppError::NotFound)` - Game does not exist
    /// - `Err(AppError::DbErr)` - Includes the duplicate-review unique violation
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        self.require_game(params.game_id).await?;

        Ok(ReviewRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets a filtered page of reviews with the filters echoed back.
    pub async fn get_all(&self, query: ReviewListQuery) -> Result<PaginatedReviews, AppError> {
        let page = ReviewRepository::new(self.db).get_all(&query).await?;

        Ok(PaginatedReviews {
            page,
            filters: query.filters_dto(),
        })
    }

    /// Reviews of one game.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn get_by_game(
        &self,
        game_id: i32,
        options: ListOptions<ReviewSortField>,
    ) -> Result<PaginatedReviews, AppError> {
        self.require_game(game_id).await?;

        self.get_all(ReviewListQuery {
            options,
            game_id: Some(game_id),
            ..Default::default()
        })
        .await
    }

    /// Reviews written by one user.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_by_user(
        &self,
        user_id: i32,
        options: ListOptions<ReviewSortField>,
    ) -> Result<PaginatedReviews, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        self.get_all(ReviewListQuery {
            options,
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    /// Mean rating of a game, null when it has no reviews.
    pub async fn average_rating(&self, game_id: i32) -> Result<AverageRating, AppError> {
        self.require_game(game_id).await?;

        let (mean, count) = ReviewRepository::new(self.db)
            .rating_summary(game_id)
            .await?;

        Ok(AverageRating::from_summary(game_id, mean, count))
    }

    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).delete(id).await?)
    }

    async fn require_game(&self, game_id: i32) -> Result<(), AppError> {
        if !GameRepository::new(self.db).exists(game_id).await? {
            return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
