use super::*;

/// Tests finding a user by ID.
///
/// Expected: Ok(Some) for an existing user, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.email, created.email);

    assert!(repo.find_by_id(created.id + 100).await?.is_none());

    Ok(())
}

/// Tests the credential lookup used by login.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn finds_credentials_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("zelda@hyrule.com")
        .password_hash("$argon2id$stored")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let credentials = repo
        .find_credentials_by_email("zelda@hyrule.com")
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "$argon2id$stored");
    assert_eq!(credentials.user.email, "zelda@hyrule.com");

    assert!(repo
        .find_credentials_by_email("ganon@hyrule.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests email existence check.
///
/// Expected: true only for a registered email
#[tokio::test]
async fn checks_email_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.email_exists(&user.email).await?);
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
