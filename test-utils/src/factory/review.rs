//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews for an existing user and game.
///
/// # Example
///
/// ```rust,ignore
/// let review = ReviewFactory::new(&db, user.id, game.id)
///     .rating(5)
///     .title("Masterpiece")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    game_id: i32,
    title: String,
    content: String,
    rating: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Review {id}"`
    /// - content: `"Review content {id}"`
    /// - rating: 3
    pub fn new(db: &'a DatabaseConnection, user_id: i32, game_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            game_id,
            title: format!("Review {}", id),
            content: format!("Review content {}", id),
            rating: 3,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert, including constraint violations
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            rating: ActiveValue::Set(self.rating),
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, game_id).build().await
}
