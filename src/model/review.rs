use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

/// A review joined with its author's username and the reviewed game's title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub rating: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub username: String,
    pub game_title: String,
    pub game_genre: Option<String>,
    pub game_platform: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub title: String,
    pub content: Option<String>,
    pub rating: i32,
    pub game_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    pub title: String,
    pub content: Option<String>,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFiltersDto {
    pub sort_by: String,
    pub order: String,
    pub search: Option<String>,
    pub rating: Option<String>,
    pub game_id: Option<i32>,
    pub user_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedReviewsDto {
    pub records: Vec<ReviewDto>,
    pub pagination: PaginationDto,
    pub filters: ReviewFiltersDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageRatingDto {
    pub game_id: i32,
    /// Rounded to two decimals; null when the game has no reviews.
    pub average_rating: Option<f64>,
    pub review_count: u64,
}
