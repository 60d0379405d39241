use super::*;

/// Tests a successful sign-up.
///
/// Expected: Ok with a token whose claims name the new user
#[tokio::test]
async fn signs_up_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let authenticated = AuthService::new(db, &tokens)
        .signup(input("link@hyrule.com"))
        .await?;

    let claims = tokens.verify(&authenticated.token)?;
    assert_eq!(claims.id, authenticated.user.id);
    assert_eq!(authenticated.user.role, UserRole::User);

    Ok(())
}

/// Tests that sign-up cannot self-assign admin.
///
/// Expected: requested admin role downgraded to user
#[tokio::test]
async fn downgrades_requested_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let mut request = input("ganon@hyrule.com");
    request.role = Some(UserRole::Admin);
    let authenticated = AuthService::new(db, &tokens).signup(request).await?;

    assert_eq!(authenticated.user.role, UserRole::User);

    Ok(())
}

/// Tests sign-up with a registered email.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let service = AuthService::new(db, &tokens);

    service.signup(input("link@hyrule.com")).await?;
    let result = service.signup(input("link@hyrule.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
