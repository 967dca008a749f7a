use super::*;

/// Tests that deletion removes both file and record.
///
/// Expected: Ok, empty directory, and a later download is not found
#[tokio::test]
async fn removes_file_and_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let service = PdfService::new(db, &storage);
    let uploaded = service.upload(upload_param()).await?;

    service.delete(uploaded.id).await?;

    assert!(storage.list().await?.is_empty());
    assert!(matches!(
        service.download(uploaded.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a record whose file is already gone.
///
/// Expected: Ok and the record removed
#[tokio::test]
async fn tolerates_missing_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let row = factory::pdf::create_pdf(db, "uploads/gone.pdf").await?;
    let service = PdfService::new(db, &storage);

    service.delete(row.id).await?;

    assert!(matches!(
        service.delete(row.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
