use super::*;

/// Tests reading stored filenames, including rows with corrupt fiche types.
///
/// Expected: Ok with `(id, filename)` for every row, ordered by ID
#[tokio::test]
async fn returns_every_filename() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pdf_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::pdf::PdfFactory::new(db)
        .filename("a.pdf")
        .build()
        .await?;
    let second = factory::pdf::PdfFactory::new(db)
        .filename("b.pdf")
        .fiche_type("unknown")
        .build()
        .await?;

    let filenames = PdfRepository::new(db).get_all_filenames().await?;

    assert_eq!(
        filenames,
        vec![
            (first.id, "a.pdf".to_string()),
            (second.id, "b.pdf".to_string())
        ]
    );

    Ok(())
}
