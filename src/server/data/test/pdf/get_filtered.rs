use super::*;

/// Tests listing with no filter.
///
/// Expected: Ok with every record, newest first
#[tokio::test]
async fn returns_all_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::Utc::now();
    let older = factory::pdf::PdfFactory::new(db)
        .created_at(now - chrono::Duration::minutes(5))
        .build()
        .await?;
    let newer = factory::pdf::PdfFactory::new(db).created_at(now).build().await?;

    let ids: Vec<i32> = PdfRepository::new(db)
        .get_filtered(PdfFilter::default())
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests combining the fiche type and client filters.
///
/// Expected: Ok with only records matching both
#[tokio::test]
async fn filters_by_fiche_type_and_client() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let matching = factory::pdf::PdfFactory::new(db)
        .fiche_type("presence")
        .client_id(client.id)
        .build()
        .await?;
    factory::pdf::PdfFactory::new(db)
        .fiche_type("plan")
        .client_id(client.id)
        .build()
        .await?;
    factory::pdf::PdfFactory::new(db)
        .fiche_type("presence")
        .build()
        .await?;

    let repo = PdfRepository::new(db);

    let both = repo
        .get_filtered(PdfFilter {
            fiche_type: Some(FicheType::Presence),
            client_id: Some(client.id),
        })
        .await?;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, matching.id);

    let by_type = repo
        .get_filtered(PdfFilter {
            fiche_type: Some(FicheType::Presence),
            client_id: None,
        })
        .await?;
    assert_eq!(by_type.len(), 2);

    let by_client = repo
        .get_filtered(PdfFilter {
            fiche_type: None,
            client_id: Some(client.id),
        })
        .await?;
    assert_eq!(by_client.len(), 2);

    Ok(())
}
