use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_len(Game::Title, 255))
                    .col(string_len_null(Game::Genre, 100))
                    .col(text_null(Game::Description))
                    .col(string_len_null(Game::Developer, 255))
                    .col(date_null(Game::ReleaseDate))
                    .col(string_len_null(Game::Publisher, 255))
                    .col(string_len_null(Game::Platform, 100))
                    .col(text_null(Game::ImageUrl))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Game::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "games")]
    Table,
    Id,
    Title,
    Genre,
    Description,
    Developer,
    ReleaseDate,
    Publisher,
    Platform,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
