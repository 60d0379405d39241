use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub platform: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating or fully replacing a game.
///
/// `release_date` is kept as text so a malformed date yields a validation message
/// rather than a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GamePayloadDto {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub release_date: Option<String>,
    pub publisher: Option<String>,
    pub platform: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameFiltersDto {
    pub sort_by: String,
    pub order: String,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedGamesDto {
    pub records: Vec<GameDto>,
    pub pagination: PaginationDto,
    pub filters: GameFiltersDto,
}
