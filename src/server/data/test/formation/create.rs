use super::*;
use crate::server::util::db::is_unique_violation;

/// Tests creating a formation with its schedule.
///
/// Expected: Ok with schedule days stored in submission order
#[tokio::test]
async fn creates_formation_with_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_formation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormationRepository::new(db);
    let created = repo.create(solidworks_param()).await?;

    assert_eq!(created.formation_id, "solidworks-3d");
    assert_eq!(created.schedule.len(), 2);
    assert_eq!(created.schedule[0].day, "J1");
    assert_eq!(created.schedule[1].content, "Assemblages");

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, created);

    Ok(())
}

/// Tests that a duplicate business code leaves no partial rows behind.
///
/// Expected: Err recognized as a unique violation, and only the first formation's
/// schedule stored
#[tokio::test]
async fn rejects_duplicate_formation_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_formation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormationRepository::new(db);
    repo.create(solidworks_param()).await?;

    let result = repo.create(solidworks_param()).await;

    assert!(is_unique_violation(&result.unwrap_err()));
    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].schedule.len(), 2);

    Ok(())
}
