use super::*;

/// Tests empty permission list grants access to a known user.
///
/// Expected: Ok(User) matching the forwarded ID
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let headers = headers_for(&user.id.to_string());

    let returned = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert!(!returned.admin);

    Ok(())
}

/// Tests a request without the actor header.
///
/// Expected: Err(AuthError::MissingActor)
#[tokio::test]
async fn rejects_missing_actor_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingActor))
    ));

    Ok(())
}

/// Tests an actor header that is not a numeric user ID.
///
/// Expected: Err(AuthError::InvalidActor)
#[tokio::test]
async fn rejects_non_numeric_actor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers_for("admin");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::InvalidActor(value))) => assert_eq!(value, "admin"),
        other => panic!("expected InvalidActor, got {:?}", other),
    }

    Ok(())
}

/// Tests a forwarded ID with no matching user row.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers_for("77");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));

    Ok(())
}
