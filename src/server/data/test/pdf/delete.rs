use super::*;

/// Tests deleting a PDF record.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_record_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::pdf::create_pdf(db, "uploads/x.pdf").await?;
    let repo = PdfRepository::new(db);

    assert!(repo.delete(row.id).await?);
    assert!(repo.find_by_id(row.id).await?.is_none());
    assert!(!repo.delete(row.id).await?);

    Ok(())
}
