//! Review domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, FromQueryResult};
use serde::Deserialize;

use crate::{
    model::review::{AverageRatingDto, PaginatedReviewsDto, ReviewDto, ReviewFiltersDto},
    server::{
        data::query::{Filter, ListOptions, Page, SortField, SortOrder},
        error::AppError,
        model::list::ListParams,
        util::parse::{parse_date_range, parse_id},
    },
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A review joined with its author's username and the reviewed game's title, genre and
/// platform.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct Review {
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

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            title: self.title,
            content: self.content,
            rating: self.rating,
            user_id: self.user_id,
            game_id: self.game_id,
            username: self.username,
            game_title: self.game_title,
            game_genre: self.game_genre,
            game_platform: self.game_platform,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub game_id: i32,
    pub title: String,
    pub content: String,
    pub rating: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub rating: i32,
}

/// Rating predicate parsed from `rating=4` or `rating=2-4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFilter {
    Exact(i32),
    Range(i32, i32),
}

impl RatingFilter {
    /// Accepts a single rating or an inclusive `min-max` range within 1..=5.
    ///
    /// Anything else is rejected rather than ignored.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let invalid = || {
            AppError::BadRequest(format!(
                "rating must be an integer between {min} and {max} or a range like {min}-{max}",
                min = MIN_RATING,
                max = MAX_RATING
            ))
        };
        let in_range = |r: i32| (MIN_RATING..=MAX_RATING).contains(&r);

        let value = value.trim();
        match value.split_once('-') {
            Some((min, max)) => {
                let min: i32 = min.trim().parse().map_err(|_| invalid())?;
                let max: i32 = max.trim().parse().map_err(|_| invalid())?;
                if !in_range(min) || !in_range(max) || min > max {
                    return Err(invalid());
                }
                Ok(Self::Range(min, max))
            }
            None => {
                let rating: i32 = value.parse().map_err(|_| invalid())?;
                if !in_range(rating) {
                    return Err(invalid());
                }
                Ok(Self::Exact(rating))
            }
        }
    }

    pub fn as_string(&self) -> String {
        match self {
            Self::Exact(r) => r.to_string(),
            Self::Range(min, max) => format!("{}-{}", min, max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortField {
    Id,
    Title,
    Rating,
    CreatedAt,
    UpdatedAt,
}

impl SortField for ReviewSortField {
    type Column = entity::review::Column;

    const DEFAULT: Self = Self::CreatedAt;
    const DEFAULT_ORDER: SortOrder = SortOrder::Desc;
    const ALLOWED: &'static [Self] = &[
        Self::Id,
        Self::Title,
        Self::Rating,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Rating => "rating",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn column(&self) -> Self::Column {
        use entity::review::Column;

        match self {
            Self::Id => Column::Id,
            Self::Title => Column::Title,
            Self::Rating => Column::Rating,
            Self::CreatedAt => Column::CreatedAt,
            Self::UpdatedAt => Column::UpdatedAt,
        }
    }
}

/// `GET /api/reviews` query string as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListParams {
    #[serde(flatten)]
    pub list: ListParams,
    pub rating: Option<String>,
    pub game_id: Option<String>,
    pub user_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated review list query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewListQuery {
    pub options: ListOptions<ReviewSortField>,
    pub rating: Option<RatingFilter>,
    pub game_id: Option<i32>,
    pub user_id: Option<i32>,
    /// Inclusive bounds on `created_at`, by UTC day.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReviewListQuery {
    pub fn filter(&self) -> Filter {
        use entity::review::Column;

        Filter::new()
            .search(
                &[Column::Title, Column::Content],
                self.options.search.as_deref(),
            )
            .add_option(self.rating, |rating| match rating {
                RatingFilter::Exact(r) => Column::Rating.eq(r),
                RatingFilter::Range(min, max) => Column::Rating.between(min, max),
            })
            .add_option(self.game_id, |id| Column::GameId.eq(id))
            .add_option(self.user_id, |id| Column::UserId.eq(id))
            .timestamp_range(Column::CreatedAt, self.start_date, self.end_date)
    }

    pub fn filters_dto(&self) -> ReviewFiltersDto {
        ReviewFiltersDto {
            sort_by: self.options.sort_by.name().to_string(),
            order: self.options.order.as_str().to_string(),
            search: self.options.search.clone(),
            rating: self.rating.map(|r| r.as_string()),
            game_id: self.game_id,
            user_id: self.user_id,
            start_date: self.start_date.map(|d| d.to_string()),
            end_date: self.end_date.map(|d| d.to_string()),
        }
    }
}

impl TryFrom<ReviewListParams> for ReviewListQuery {
    type Error = AppError;

    fn try_from(params: ReviewListParams) -> Result<Self, Self::Error> {
        let rating = match params.rating.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => None,
            Some(rating) => Some(RatingFilter::parse(rating)?),
        };
        let (start_date, end_date) =
            parse_date_range(params.start_date.as_deref(), params.end_date.as_deref())?;

        Ok(Self {
            options: params.list.into_options()?,
            rating,
            game_id: parse_id("gameId", params.game_id.as_deref())?,
            user_id: parse_id("userId", params.user_id.as_deref())?,
            start_date,
            end_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedReviews {
    pub page: Page<Review>,
    pub filters: ReviewFiltersDto,
}

impl PaginatedReviews {
    pub fn into_dto(self) -> PaginatedReviewsDto {
        PaginatedReviewsDto {
            records: self.page.records.into_iter().map(Review::into_dto).collect(),
            pagination: self.page.pagination.into_dto(),
            filters: self.filters,
        }
    }
}

/// Mean rating of a game's reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageRating {
    pub game_id: i32,
    pub average_rating: Option<f64>,
    pub review_count: u64,
}

impl AverageRating {
    /// Rounds the aggregated mean to two decimal places.
    ///
    /// The mean is dropped when there are no reviews to back it.
    pub fn from_summary(game_id: i32, mean: Option<f64>, count: i64) -> Self {
        let review_count = u64::try_from(count).unwrap_or(0);
        let average_rating = mean
            .filter(|_| review_count > 0)
            .map(|mean| (mean * 100.0).round() / 100.0);

        Self {
            game_id,
            average_rating,
            review_count,
        }
    }

    pub fn into_dto(self) -> AverageRatingDto {
        AverageRatingDto {
            game_id: self.game_id,
            average_rating: self.average_rating,
            review_count: self.review_count,
        }
    }
}
