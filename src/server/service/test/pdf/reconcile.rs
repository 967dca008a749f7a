use super::*;
use crate::server::model::pdf::ReconcileReport;

/// Tests the startup sweep over a directory with an orphan and a missing artifact.
///
/// Expected: orphan removed, referenced file kept, missing record reported
#[tokio::test]
async fn removes_orphans_and_reports_missing_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let service = PdfService::new(db, &storage);
    let kept = service.upload(upload_param()).await?;
    storage.write("1700000000000-1.pdf", PDF_BYTES).await?;
    let missing = factory::pdf::PdfFactory::new(db)
        .filename("1700000000000-2.pdf")
        .build()
        .await?;

    let report = service.reconcile().await?;

    assert_eq!(report.removed_orphans, vec!["1700000000000-1.pdf".to_string()]);
    assert_eq!(report.missing_artifacts, vec![missing.id]);
    assert_eq!(storage.list().await?, vec![kept.filename]);

    Ok(())
}

/// Tests the sweep before any upload created the directory.
///
/// Expected: Ok with an empty report
#[tokio::test]
async fn empty_store_is_consistent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let report = PdfService::new(db, &storage).reconcile().await?;

    assert_eq!(report, ReconcileReport::default());

    Ok(())
}

/// Tests the sweep over a directory shared with files it never wrote.
///
/// Expected: only the unreferenced generated artifact is removed; foreign files survive
#[tokio::test]
async fn leaves_foreign_files_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let foreign = [".env", ".gitkeep", "app.db", "notes-final.pdf"];
    for name in foreign {
        storage.write(name, b"keep me").await?;
    }
    storage.write("1700000000000-3.pdf", PDF_BYTES).await?;

    let report = PdfService::new(db, &storage).reconcile().await?;

    assert_eq!(report.removed_orphans, vec!["1700000000000-3.pdf".to_string()]);
    let mut expected: Vec<String> = foreign.iter().map(|name| name.to_string()).collect();
    expected.sort();
    assert_eq!(storage.list().await?, expected);

    Ok(())
}
