use super::*;

/// Tests that uploaded content comes back byte-identical.
///
/// Expected: Ok with same bytes and original name
#[tokio::test]
async fn returns_uploaded_bytes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let service = PdfService::new(db, &storage);
    let uploaded = service.upload(upload_param()).await?;

    let (pdf, bytes) = service.download(uploaded.id).await?;

    assert_eq!(bytes, PDF_BYTES);
    assert_eq!(pdf.original_name, "plan-formation.pdf");

    Ok(())
}

/// Tests a missing record.
///
/// Expected: Err(NotFound("PDF not found"))
#[tokio::test]
async fn missing_record_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    match PdfService::new(db, &storage).download(1).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "PDF not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|(p, _)| p)),
    }

    Ok(())
}

/// Tests a record whose file was removed from disk.
///
/// Expected: Err(NotFound("File not found on server"))
#[tokio::test]
async fn missing_file_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let service = PdfService::new(db, &storage);
    let uploaded = service.upload(upload_param()).await?;
    storage.remove(&uploaded.filename).await?;

    match service.download(uploaded.id).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "File not found on server"),
        other => panic!("expected NotFound, got {:?}", other.map(|(p, _)| p)),
    }

    Ok(())
}
