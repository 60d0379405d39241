//! Game data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, ColumnTrait,
};

use crate::server::{
    data::query::{fetch_page, Page},
    model::game::{Game, GameListQuery, GameParams},
};

/// Repository providing database operations for games.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game with both timestamps set to now.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: GameParams) -> Result<Game, DbErr> {
        let now = Utc::now();

        let entity = entity::game::ActiveModel {
            title: ActiveValue::Set(params.title),
            genre: ActiveValue::Set(params.genre),
            description: ActiveValue::Set(params.description),
            developer: ActiveValue::Set(params.developer),
            release_date: ActiveValue::Set(params.release_date),
            publisher: ActiveValue::Set(params.publisher),
            platform: ActiveValue::Set(params.platform),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Finds a game by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one filtered, sorted page of games.
    pub async fn get_all(&self, query: &GameListQuery) -> Result<Page<Game>, DbErr> {
        let page = fetch_page::<_, entity::game::Model, _>(
            self.db,
            entity::prelude::Game::find(),
            query.filter(),
            &query.options,
        )
        .await?;

        Ok(page.map(Game::from_entity))
    }

    /// Replaces every writable field and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: GameParams) -> Result<Option<Game>, DbErr> {
        let Some(existing) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::game::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.genre = ActiveValue::Set(params.genre);
        active.description = ActiveValue::Set(params.description);
        active.developer = ActiveValue::Set(params.developer);
        active.release_date = ActiveValue::Set(params.release_date);
        active.publisher = ActiveValue::Set(params.publisher);
        active.platform = ActiveValue::Set(params.platform);
        active.image_url = ActiveValue::Set(params.image_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Game::from_entity(entity)))
    }

    /// Deletes a game; its reviews are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The deleted game
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(game) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Game::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(game))
    }
}
