use super::*;

/// Tests inserting a PDF metadata row.
///
/// Expected: Ok with fiche type, size, and form data round-tripped
#[tokio::test]
async fn creates_pdf_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PdfRepository::new(db);
    let pdf = repo
        .create(CreatePdfParam {
            filename: "1767225600000-123456789.pdf".to_string(),
            original_name: "attestation.pdf".to_string(),
            path: "uploads/1767225600000-123456789.pdf".to_string(),
            size: 2048,
            mimetype: "application/pdf".to_string(),
            fiche_type: FicheType::Evaluation,
            client_id: Some(3),
            form_data: Some(serde_json::json!({"score": 17})),
            created_by: Some(1),
        })
        .await?;

    assert_eq!(pdf.fiche_type, FicheType::Evaluation);
    assert_eq!(pdf.size, 2048);
    assert_eq!(pdf.url(), format!("/pdf/{}", pdf.id));

    let stored = repo.find_by_id(pdf.id).await?.unwrap();
    assert_eq!(stored.form_data, Some(serde_json::json!({"score": 17})));
    assert_eq!(stored.client_id, Some(3));

    Ok(())
}

/// Tests reading a row whose fiche type was corrupted outside the API.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_stored_fiche_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::pdf::PdfFactory::new(db)
        .fiche_type("invoice")
        .build()
        .await?;

    let result = PdfRepository::new(db).find_by_id(row.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
