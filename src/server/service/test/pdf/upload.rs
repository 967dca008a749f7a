use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests a successful upload.
///
/// Expected: file written under the generated name and a matching record stored
#[tokio::test]
async fn stores_file_and_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let client = factory::client::create_client(db).await?;
    let pdf = PdfService::new(db, &storage)
        .upload(UploadPdfParam {
            client_id: Some(client.id.to_string()),
            form_data: Some(r#"{"participants":3}"#.to_string()),
            ..upload_param()
        })
        .await?;

    assert!(pdf.filename.ends_with(".pdf"));
    assert_eq!(pdf.original_name, "plan-formation.pdf");
    assert_eq!(pdf.size, PDF_BYTES.len() as u64);
    assert_eq!(pdf.client_id, Some(client.id));
    assert_eq!(storage.list().await?, vec![pdf.filename.clone()]);
    assert_eq!(storage.read(&pdf.filename).await?.unwrap(), PDF_BYTES);

    Ok(())
}

/// Tests that a non-PDF content type stores nothing.
///
/// Expected: Err(UploadErr(NotPdf)), no file, no record
#[tokio::test]
async fn rejects_non_pdf_before_storing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let result = PdfService::new(db, &storage)
        .upload(UploadPdfParam {
            content_type: Some("image/png".to_string()),
            ..upload_param()
        })
        .await;

    assert!(matches!(result, Err(AppError::UploadErr(UploadError::NotPdf))));
    assert!(storage.list().await?.is_empty());
    assert_eq!(entity::prelude::Pdf::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an oversized payload writes nothing.
///
/// Expected: Err(UploadErr(TooLarge)) and an empty upload directory
#[tokio::test]
async fn rejects_oversized_payload_before_writing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let result = PdfService::new(db, &storage)
        .upload(UploadPdfParam {
            bytes: vec![b'x'; 10 * 1024 * 1024 + 1],
            ..upload_param()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::UploadErr(UploadError::TooLarge { .. }))
    ));
    assert!(!storage.dir().exists());

    Ok(())
}

/// Tests an upload referencing a client that doesn't exist.
///
/// Expected: Err(UploadErr(ClientNotFound)) and nothing written
#[tokio::test]
async fn rejects_unknown_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let result = PdfService::new(db, &storage)
        .upload(UploadPdfParam {
            client_id: Some("404".to_string()),
            ..upload_param()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::UploadErr(UploadError::ClientNotFound(404)))
    ));
    assert!(storage.list().await?.is_empty());

    Ok(())
}

/// Tests the compensating delete when the metadata insert fails.
///
/// The PDF table is not created, so the insert fails after the file is written.
///
/// Expected: Err(DbErr) and the written file removed again
#[tokio::test]
async fn removes_file_when_record_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let result = PdfService::new(db, &storage).upload(upload_param()).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(storage.dir().exists());
    assert!(storage.list().await?.is_empty());

    Ok(())
}

/// Tests an upload whose file cannot be written.
///
/// A regular file sits where the upload directory should be created.
///
/// Expected: Err(IoErr), no record, nothing written next to the blocking file
#[tokio::test]
async fn write_failure_stores_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let root = tempfile::tempdir()?;
    let blocker = root.path().join("uploads");
    tokio::fs::write(&blocker, b"not a directory").await?;
    let storage = PdfStorage::new(&blocker);

    let result = PdfService::new(db, &storage).upload(upload_param()).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert_eq!(entity::prelude::Pdf::find().count(db).await?, 0);
    assert_eq!(tokio::fs::read(&blocker).await?, b"not a directory");
    let mut entries = tokio::fs::read_dir(root.path()).await?;
    let mut count = 0;
    while entries.next_entry().await?.is_some() {
        count += 1;
    }
    assert_eq!(count, 1);

    Ok(())
}
