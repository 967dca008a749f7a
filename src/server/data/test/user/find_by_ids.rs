use super::*;

/// Tests batch lookup of users.
///
/// Expected: Ok with stored users only; unknown IDs skipped
#[tokio::test]
async fn returns_known_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_admin(db).await?;

    let mut ids: Vec<i32> = UserRepository::new(db)
        .find_by_ids(vec![second.id, 500, first.id])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests batch lookup with no IDs.
///
/// Expected: Ok with empty vector and no query issued
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).find_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
