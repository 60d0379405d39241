use super::*;

/// Tests an admin creating another admin.
///
/// Expected: requested admin role kept
#[tokio::test]
async fn admin_actor_may_grant_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = Identity {
        user_id: 1,
        role: UserRole::Admin,
    };
    let user = UserService::new(db)
        .create(input("impa@hyrule.com", Some(UserRole::Admin)), Some(&actor))
        .await?;

    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

/// Tests that the stored password is a hash that verifies.
///
/// Expected: stored column differs from the plaintext and verifies against it
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(input("impa@hyrule.com", None), None)
        .await?;

    let stored = <entity::prelude::User as sea_orm::EntityTrait>::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "Password123!");
    assert!(verify_password("Password123!", &stored.password));

    Ok(())
}
