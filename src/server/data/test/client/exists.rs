use super::*;

/// Tests existence checks for present and absent IDs.
///
/// Expected: true for a stored client, false otherwise
#[tokio::test]
async fn reports_existence_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let repo = ClientRepository::new(db);

    assert!(repo.exists(client.id).await?);
    assert!(!repo.exists(client.id + 1).await?);

    Ok(())
}

/// Tests batch lookup skipping unknown IDs.
///
/// Expected: Ok with only the stored clients
#[tokio::test]
async fn find_by_ids_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::client::create_client(db).await?;
    let second = factory::client::create_client(db).await?;

    let mut found: Vec<i32> = ClientRepository::new(db)
        .find_by_ids(vec![first.id, second.id, 9999])
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    found.sort();

    assert_eq!(found, vec![first.id, second.id]);

    Ok(())
}
