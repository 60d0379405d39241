//! Review data repository for database operations.
//!
//! Reads join the author and game so each `Review` carries `username` and the game's title,
//! genre and platform.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::query::{fetch_page, Page},
    model::review::{CreateReviewParams, Review, ReviewListQuery, UpdateReviewParams},
};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn joined() -> Select<entity::prelude::Review> {
        entity::prelude::Review::find()
            .join(JoinType::InnerJoin, entity::review::Relation::User.def())
            .join(JoinType::InnerJoin, entity::review::Relation::Game.def())
            .column_as(entity::user::Column::Username, "username")
            .column_as(entity::game::Column::Title, "game_title")
            .column_as(entity::game::Column::Genre, "game_genre")
            .column_as(entity::game::Column::Platform, "game_platform")
    }

    /// Inserts a review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review with author and game names
    /// - `Err(DbErr)` - Database error, including the one-review-per-game unique violation
    ///   and foreign-key violations
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();

        let entity = entity::review::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            rating: ActiveValue::Set(params.rating),
            user_id: ActiveValue::Set(params.user_id),
            game_id: ActiveValue::Set(params.game_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("review {} after insert", entity.id)))
    }

    /// Finds a review by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        Self::joined()
            .filter(entity::review::Column::Id.eq(id))
            .into_model::<Review>()
            .one(self.db)
            .await
    }

    /// Gets one filtered, sorted page of reviews.
    pub async fn get_all(&self, query: &ReviewListQuery) -> Result<Page<Review>, DbErr> {
        fetch_page(self.db, Self::joined(), query.filter(), &query.options).await
    }

    /// Mean rating and review count of a game, computed in one aggregate query.
    ///
    /// # Returns
    /// - `Ok((Some(mean), count))` - The game has reviews
    /// - `Ok((None, 0))` - No reviews, including for unknown games
    /// - `Err(DbErr)` - Database error during the query
    pub async fn rating_summary(&self, game_id: i32) -> Result<(Option<f64>, i64), DbErr> {
        use entity::review::Column;

        let summary = entity::prelude::Review::find()
            .select_only()
            .column_as(Expr::from(Func::avg(Expr::col(Column::Rating))), "average_rating")
            .column_as(Expr::from(Func::count(Expr::col(Column::Id))), "review_count")
            .filter(Column::GameId.eq(game_id))
            .into_tuple::<(Option<f64>, i64)>()
            .one(self.db)
            .await?;

        Ok(summary.unwrap_or((None, 0)))
    }

    /// Replaces title, content and rating and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, DbErr> {
        let Some(existing) = entity::prelude::Review::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.content = ActiveValue::Set(params.content);
        active.rating = ActiveValue::Set(params.rating);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(params.id).await
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The deleted review
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let Some(review) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(review))
    }
}
