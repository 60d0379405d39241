use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{game::GameRepository, query::ListOptions},
    model::game::{GameListQuery, GameParams},
};

mod create;
mod delete;
mod update;

fn params(title: &str) -> GameParams {
    GameParams {
        title: title.to_string(),
        genre: Some("Action RPG".to_string()),
        description: None,
        developer: Some("FromSoftware".to_string()),
        release_date: NaiveDate::from_ymd_opt(2022, 2, 25),
        publisher: Some("Bandai Namco".to_string()),
        platform: Some("PC".to_string()),
        image_url: None,
    }
}
