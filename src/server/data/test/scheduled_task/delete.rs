use super::*;

/// Tests deleting an existing task and then a missing one.
///
/// Expected: Ok(true) first, Ok(false) on repeat
#[tokio::test]
async fn deletes_task_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let task = factory::create_scheduled_task(db, organization.id, owner.id).await?;

    let repo = ScheduledTaskRepository::new(db);

    assert!(repo.delete(task.id).await?);
    assert!(repo.find_by_id(task.id).await?.is_none());
    assert!(!repo.delete(task.id).await?);

    Ok(())
}
