use super::*;

/// Tests replacing a game's fields.
///
/// Expected: Ok(Some) with new values and created_at untouched
#[tokio::test]
async fn updates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = GameRepository::new(db);

    let updated = repo.update(game.id, params("Renamed")).await?.unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.developer.as_deref(), Some("FromSoftware"));
    assert_eq!(updated.created_at, game.created_at);
    assert!(updated.updated_at >= game.updated_at);

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.update(7, params("Ghost")).await?.is_none());

    Ok(())
}
