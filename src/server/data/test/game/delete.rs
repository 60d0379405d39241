use super::*;

/// Tests deleting a game removes its reviews.
///
/// Expected: Ok(Some) with the deleted game and no reviews left
#[tokio::test]
async fn deletes_game_and_cascades_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game, _) = factory::helpers::create_review_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    let deleted = repo.delete(game.id).await?.unwrap();

    assert_eq!(deleted.id, game.id);
    assert!(repo.find_by_id(game.id).await?.is_none());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a game that does not exist.
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

    assert!(repo.delete(7).await?.is_none());

    Ok(())
}
