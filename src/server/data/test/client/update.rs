use super::*;
use crate::server::util::db::is_unique_violation;

/// Tests that an update only touches the provided fields.
///
/// Expected: Ok(Some) with name changed and every other field preserved
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let created = repo.create(acme_param()).await?;

    let updated = repo
        .update(
            created.id,
            UpdateClientParam {
                name: Some("Acme Industries".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Acme Industries");
    assert_eq!(updated.client_id, created.client_id);
    assert_eq!(updated.phone, created.phone);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests an update that provides no fields.
///
/// Expected: Ok(Some) with the stored client unchanged
#[tokio::test]
async fn empty_update_returns_current_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let created = repo.create(acme_param()).await?;

    let updated = repo
        .update(created.id, UpdateClientParam::default())
        .await?
        .unwrap();

    assert_eq!(updated, created);

    Ok(())
}

/// Tests clearing the optional email with a blank value.
///
/// Expected: Ok(Some) with email set to None
#[tokio::test]
async fn blank_email_clears_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::ClientFactory::new(db)
        .email("contact@acme.tn")
        .build()
        .await?;

    let updated = ClientRepository::new(db)
        .update(
            client.id,
            UpdateClientParam {
                email: Some(String::new()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.email, None);

    Ok(())
}

/// Tests updating a missing client.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClientRepository::new(db)
        .update(
            42,
            UpdateClientParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests moving a client onto another client's business code.
///
/// Expected: Err recognized as a unique violation
#[tokio::test]
async fn rejects_taken_client_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .client_id("C-1")
        .build()
        .await?;
    let other = factory::client::ClientFactory::new(db)
        .client_id("C-2")
        .build()
        .await?;

    let result = ClientRepository::new(db)
        .update(
            other.id,
            UpdateClientParam {
                client_id: Some("C-1".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
