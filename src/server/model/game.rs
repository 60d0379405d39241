//! Game domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    model::game::{GameDto, GameFiltersDto, GamePayloadDto, PaginatedGamesDto},
    server::{
        data::query::{Filter, ListOptions, Page, SortField, SortOrder},
        error::AppError,
        model::list::ListParams,
        util::parse::{parse_date, parse_date_range},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
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

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            developer: self.developer,
            release_date: self.release_date,
            publisher: self.publisher,
            platform: self.platform,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            description: entity.description,
            developer: entity.developer,
            release_date: entity.release_date,
            publisher: entity.publisher,
            platform: entity.platform,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Writable game fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct GameParams {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub platform: Option<String>,
    pub image_url: Option<String>,
}

impl GameParams {
    /// Trims text fields, treating blank optional fields as absent.
    pub fn from_dto(dto: GamePayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.trim().to_string(),
            genre: non_blank(dto.genre),
            description: non_blank(dto.description),
            developer: non_blank(dto.developer),
            release_date: parse_date("release_date", dto.release_date.as_deref())?,
            publisher: non_blank(dto.publisher),
            platform: non_blank(dto.platform),
            image_url: non_blank(dto.image_url),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSortField {
    Id,
    Title,
    Genre,
    Developer,
    Publisher,
    Platform,
    ReleaseDate,
    CreatedAt,
    UpdatedAt,
}

impl SortField for GameSortField {
    type Column = entity::game::Column;

    const DEFAULT: Self = Self::CreatedAt;
    const DEFAULT_ORDER: SortOrder = SortOrder::Desc;
    const ALLOWED: &'static [Self] = &[
        Self::Id,
        Self::Title,
        Self::Genre,
        Self::Developer,
        Self::Publisher,
        Self::Platform,
        Self::ReleaseDate,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Genre => "genre",
            Self::Developer => "developer",
            Self::Publisher => "publisher",
            Self::Platform => "platform",
            Self::ReleaseDate => "release_date",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn column(&self) -> Self::Column {
        use entity::game::Column;

        match self {
            Self::Id => Column::Id,
            Self::Title => Column::Title,
            Self::Genre => Column::Genre,
            Self::Developer => Column::Developer,
            Self::Publisher => Column::Publisher,
            Self::Platform => Column::Platform,
            Self::ReleaseDate => Column::ReleaseDate,
            Self::CreatedAt => Column::CreatedAt,
            Self::UpdatedAt => Column::UpdatedAt,
        }
    }
}

/// `GET /api/games` query string as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListParams {
    #[serde(flatten)]
    pub list: ListParams,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated game list query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameListQuery {
    pub options: ListOptions<GameSortField>,
    /// Case-insensitive substring of `genre`.
    pub genre: Option<String>,
    /// Case-insensitive substring of `platform`.
    pub platform: Option<String>,
    /// Inclusive bounds on `release_date`.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GameListQuery {
    pub fn filter(&self) -> Filter {
        use entity::game::Column;

        Filter::new()
            .search(
                &[
                    Column::Title,
                    Column::Description,
                    Column::Genre,
                    Column::Developer,
                ],
                self.options.search.as_deref(),
            )
            .search(&[Column::Genre], self.genre.as_deref())
            .search(&[Column::Platform], self.platform.as_deref())
            .date_range(Column::ReleaseDate, self.start_date, self.end_date)
    }

    pub fn filters_dto(&self) -> GameFiltersDto {
        GameFiltersDto {
            sort_by: self.options.sort_by.name().to_string(),
            order: self.options.order.as_str().to_string(),
            search: self.options.search.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            start_date: self.start_date.map(|d| d.to_string()),
            end_date: self.end_date.map(|d| d.to_string()),
        }
    }
}

impl TryFrom<GameListParams> for GameListQuery {
    type Error = AppError;

    fn try_from(params: GameListParams) -> Result<Self, Self::Error> {
        let (start_date, end_date) =
            parse_date_range(params.start_date.as_deref(), params.end_date.as_deref())?;

        Ok(Self {
            options: params.list.into_options()?,
            genre: non_blank(params.genre),
            platform: non_blank(params.platform),
            start_date,
            end_date,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedGames {
    pub page: Page<Game>,
    pub filters: GameFiltersDto,
}

impl PaginatedGames {
    pub fn into_dto(self) -> PaginatedGamesDto {
        PaginatedGamesDto {
            records: self.page.records.into_iter().map(Game::into_dto).collect(),
            pagination: self.page.pagination.into_dto(),
            filters: self.filters,
        }
    }
}
