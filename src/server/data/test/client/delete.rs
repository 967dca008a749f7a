use super::*;

/// Tests deleting an existing client.
///
/// Expected: Ok(true) and the client is gone
#[tokio::test]
async fn deletes_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let repo = ClientRepository::new(db);

    assert!(repo.delete(client.id).await?);
    assert!(repo.find_by_id(client.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing client.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ClientRepository::new(db).delete(1).await?);

    Ok(())
}
