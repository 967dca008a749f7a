use super::*;
use crate::{model::pdf::FicheType, server::model::pdf::PdfFilter};

/// Tests that listed records carry their client and creator.
///
/// Expected: resolved summaries for live references, None for dangling ones
#[tokio::test]
async fn resolves_client_and_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    let user = factory::user::create_user(db).await?;
    let client = factory::client::create_client(db).await?;
    let linked = factory::pdf::PdfFactory::new(db)
        .client_id(client.id)
        .created_by(user.id)
        .build()
        .await?;
    let dangling = factory::pdf::PdfFactory::new(db)
        .client_id(client.id + 100)
        .created_by(user.id + 100)
        .build()
        .await?;

    let items = PdfService::new(db, &storage)
        .list(PdfFilter::default())
        .await?;

    let linked_item = items.iter().find(|i| i.pdf.id == linked.id).unwrap();
    assert_eq!(linked_item.client.as_ref().unwrap().client_id, client.client_id);
    assert_eq!(linked_item.creator.as_ref().unwrap().email, user.email);

    let dangling_item = items.iter().find(|i| i.pdf.id == dangling.id).unwrap();
    assert!(dangling_item.client.is_none());
    assert!(dangling_item.creator.is_none());

    let dto = dangling_item.clone().into_dto();
    assert_eq!(dto.client_id, Some(client.id + 100));
    assert!(dto.client.is_none());

    Ok(())
}

/// Tests filtering by fiche type through the service.
///
/// Expected: only records of that type
#[tokio::test]
async fn filters_by_fiche_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pdf_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, storage) = storage();

    factory::pdf::PdfFactory::new(db)
        .fiche_type("license")
        .build()
        .await?;
    factory::pdf::PdfFactory::new(db)
        .fiche_type("evaluation")
        .build()
        .await?;

    let items = PdfService::new(db, &storage)
        .list(PdfFilter {
            fiche_type: Some(FicheType::License),
            client_id: None,
        })
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].pdf.fiche_type, FicheType::License);

    Ok(())
}
