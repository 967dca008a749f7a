use super::*;
use chrono::{Duration, Utc};

/// Tests that clients are listed newest first.
///
/// Expected: Ok with clients ordered by created_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::client::ClientFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::client::ClientFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::client::ClientFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let clients = ClientRepository::new(db).get_all().await?;

    let ids: Vec<i32> = clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, old.id]);

    Ok(())
}

/// Tests listing with no clients.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clients = ClientRepository::new(db).get_all().await?;

    assert!(clients.is_empty());

    Ok(())
}
