use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, query::ListOptions},
    error::AppError,
    model::game::{Game, GameListQuery, GameParams, GameSortField, PaginatedGames},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: GameParams) -> Result<Game, AppError> {
        Ok(GameRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, AppError> {
        Ok(GameRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets a filtered page of games with the filters echoed back.
    pub async fn get_all(&self, query: GameListQuery) -> Result<PaginatedGames, AppError> {
        let page = GameRepository::new(self.db).get_all(&query).await?;

        Ok(PaginatedGames {
            page,
            filters: query.filters_dto(),
        })
    }

    /// Games whose genre contains `genre`, case-insensitively.
    pub async fn get_by_genre(
        &self,
        genre: &str,
        options: ListOptions<GameSortField>,
    ) -> Result<PaginatedGames, AppError> {
        let genre = genre.trim();
        if genre.is_empty() {
            return Err(AppError::BadRequest("genre must not be empty".to_string()));
        }

        self.get_all(GameListQuery {
            options,
            genre: Some(genre.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Free-text search over title, description, genre and developer.
    pub async fn search(
        &self,
        term: &str,
        mut options: ListOptions<GameSortField>,
    ) -> Result<PaginatedGames, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::BadRequest(
                "search term must not be empty".to_string(),
            ));
        }
        options.search = Some(term.to_string());

        self.get_all(GameListQuery {
            options,
            ..Default::default()
        })
        .await
    }

    /// Replaces a game's writable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Updated game
    /// - `Ok(None)` - No game with that ID
    pub async fn update(&self, id: i32, params: GameParams) -> Result<Option<Game>, AppError> {
        Ok(GameRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a game and, by cascade, its reviews.
    pub async fn delete(&self, id: i32) -> Result<Option<Game>, AppError> {
        Ok(GameRepository::new(self.db).delete(id).await?)
    }
}
