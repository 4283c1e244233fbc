use super::*;

/// Tests a task is stored with its parsed frequency and priority.
///
/// Expected: Ok(ScheduledTask) matching the record
#[tokio::test]
async fn creates_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let record = record(organization.id, owner.id);

    let task = ScheduledTaskRepository::new(db).create(record.clone()).await?;

    assert_eq!(task.organization_id, organization.id);
    assert_eq!(task.title, "Rotate backup tapes");
    assert_eq!(task.frequency, Frequency::Weekly);
    assert_eq!(task.priority, TicketPriority::Medium);
    assert_eq!(task.next_run_at, record.next_run_at);
    assert_eq!(task.created_by, owner.id);
    assert!(task.enabled);

    let found = ScheduledTaskRepository::new(db)
        .find_by_id(task.id)
        .await?
        .unwrap();
    assert_eq!(found.title, task.title);
    assert_eq!(found.location, "Server Room");

    Ok(())
}
