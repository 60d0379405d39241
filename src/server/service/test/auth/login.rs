use super::*;

/// Tests login with the sign-up password.
///
/// Expected: Ok with the same user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let service = AuthService::new(db, &tokens);

    let signed_up = service.signup(input("zelda@hyrule.com")).await?;
    let logged_in = service.login("zelda@hyrule.com", "Password123!").await?;

    assert_eq!(logged_in.user.id, signed_up.user.id);
    assert!(tokens.verify(&logged_in.token).is_ok());

    Ok(())
}

/// Tests wrong password and unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let service = AuthService::new(db, &tokens);

    service.signup(input("zelda@hyrule.com")).await?;

    let wrong_password = service.login("zelda@hyrule.com", "Password123?").await;
    let unknown_email = service.login("nobody@hyrule.com", "Password123!").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests the current-user lookup after the account is gone.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn me_fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let result = AuthService::new(db, &tokens).me(404).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
